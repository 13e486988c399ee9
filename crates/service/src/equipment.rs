//! Equipment type canonicalization and matching
//!
//! Loadboards and carriers name trailer types inconsistently ("van",
//! "dry van", "reefer", "refrigerated"). Both sides of a comparison are
//! folded to a canonical form first, then compared for exact equality.
//! There is no substring matching here: "van" and "dry van" agree only
//! because the synonym table maps both to the same canonical entry.

/// Synonym table mapping common loadboard spellings to canonical
/// equipment names. Lookups happen against the trimmed, lowercased
/// input; anything not listed canonicalizes to its own trimmed,
/// lowercased form.
static EQUIPMENT_SYNONYMS: [(&str, &str); 12] = [
	("van", "dry van"),
	("dry van", "dry van"),
	("dryvan", "dry van"),
	("reefer", "reefer"),
	("refrigerated", "reefer"),
	("refrigerated van", "reefer"),
	("flatbed", "flatbed"),
	("flat bed", "flatbed"),
	("stepdeck", "step deck"),
	("step deck", "step deck"),
	("power only", "power only"),
	("box truck", "box truck"),
];

/// Folds an equipment label to its canonical form.
///
/// Trims and lowercases, then consults the synonym table. Unrecognized
/// labels pass through in their trimmed, lowercased form so two carriers
/// using the same unusual label still agree.
pub fn canonical(equipment: &str) -> String {
	let folded = equipment.trim().to_lowercase();
	for (alias, canonical) in EQUIPMENT_SYNONYMS.iter() {
		if folded == *alias {
			return (*canonical).to_string();
		}
	}
	folded
}

/// Returns true when a load's equipment satisfies the query.
///
/// An empty (or whitespace-only) query is a wildcard. Otherwise both
/// sides are canonicalized and compared for exact equality.
pub fn matches(load_equipment: &str, query: &str) -> bool {
	if query.trim().is_empty() {
		return true;
	}
	canonical(load_equipment) == canonical(query)
}
