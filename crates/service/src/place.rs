//! Place normalization and matching
//!
//! Origin and destination filters arrive as free text from a voice call and
//! have to line up with whatever the load board posted. Both sides are pushed
//! through the same normalization (lower-case, punctuation stripped, full US
//! state names abbreviated) and then compared leniently, so "Dallas",
//! "Dallas, TX" and "Dallas, Texas" all find each other.

/// Full state names to USPS abbreviations, all lower-case.
/// Two-word names are listed first: they must be rewritten before their
/// one-word suffixes ("west virginia" before "virginia").
static STATE_ABBREVIATIONS: [(&str, &str); 50] = [
	("new hampshire", "nh"),
	("new jersey", "nj"),
	("new mexico", "nm"),
	("new york", "ny"),
	("north carolina", "nc"),
	("north dakota", "nd"),
	("rhode island", "ri"),
	("south carolina", "sc"),
	("south dakota", "sd"),
	("west virginia", "wv"),
	("alabama", "al"),
	("alaska", "ak"),
	("arizona", "az"),
	("arkansas", "ar"),
	("california", "ca"),
	("colorado", "co"),
	("connecticut", "ct"),
	("delaware", "de"),
	("florida", "fl"),
	("georgia", "ga"),
	("hawaii", "hi"),
	("idaho", "id"),
	("illinois", "il"),
	("indiana", "in"),
	("iowa", "ia"),
	("kansas", "ks"),
	("kentucky", "ky"),
	("louisiana", "la"),
	("maine", "me"),
	("maryland", "md"),
	("massachusetts", "ma"),
	("michigan", "mi"),
	("minnesota", "mn"),
	("mississippi", "ms"),
	("missouri", "mo"),
	("montana", "mt"),
	("nebraska", "ne"),
	("nevada", "nv"),
	("ohio", "oh"),
	("oklahoma", "ok"),
	("oregon", "or"),
	("pennsylvania", "pa"),
	("tennessee", "tn"),
	("texas", "tx"),
	("utah", "ut"),
	("vermont", "vt"),
	("virginia", "va"),
	("washington", "wa"),
	("wisconsin", "wi"),
	("wyoming", "wy"),
];

/// Normalize free-text place names for comparison
///
/// Lower-cases, removes periods and commas, collapses runs of whitespace and
/// rewrites full state names to their two-letter abbreviations. The result of
/// a normalize is a fixed point: normalizing it again changes nothing.
pub fn normalize(text: &str) -> String {
	let lowered = text.to_lowercase();
	let stripped: String = lowered.chars().filter(|c| *c != '.' && *c != ',').collect();
	let mut result = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

	for (name, abbreviation) in STATE_ABBREVIATIONS.iter() {
		if result.contains(name) {
			result = replace_word(&result, name, abbreviation);
		}
	}

	result
}

/// Replace whole-word occurrences of `word` with `replacement`
///
/// "kansas" must not rewrite the tail of "arkansas", so a match counts only
/// when both neighbors are non-alphanumeric or the string edge.
fn replace_word(text: &str, word: &str, replacement: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut remaining = text;

	while let Some(pos) = remaining.find(word) {
		let end = pos + word.len();
		let bounded_before = remaining[..pos]
			.chars()
			.next_back()
			.map_or(true, |c| !c.is_alphanumeric());
		let bounded_after = remaining[end..]
			.chars()
			.next()
			.map_or(true, |c| !c.is_alphanumeric());

		result.push_str(&remaining[..pos]);
		if bounded_before && bounded_after {
			result.push_str(replacement);
		} else {
			result.push_str(word);
		}
		remaining = &remaining[end..];
	}

	result.push_str(remaining);
	result
}

/// The part of a place before the first comma, normalized
///
/// "Dallas, TX" yields "dallas"; a string without a comma yields its whole
/// normalized form.
fn city_token(text: &str) -> String {
	normalize(text.split(',').next().unwrap_or(""))
}

/// Check whether a posted place satisfies a caller's place filter
///
/// An empty query is a wildcard. Otherwise the sides match when their
/// normalized forms are equal, their city tokens are equal, or either
/// normalized form contains the other's city token. The containment is
/// deliberately permissive: "Dallas" should find "Dallas, TX" and the
/// reverse. An empty candidate never matches a non-empty query.
pub fn matches(candidate: &str, query: &str) -> bool {
	if query.trim().is_empty() {
		return true;
	}

	let normalized_candidate = normalize(candidate);
	let normalized_query = normalize(query);
	if normalized_candidate == normalized_query {
		return true;
	}

	let candidate_city = city_token(candidate);
	let query_city = city_token(query);

	// str::contains("") is always true; empty tokens must never count as hits
	if !candidate_city.is_empty() && candidate_city == query_city {
		return true;
	}
	if !query_city.is_empty() && normalized_candidate.contains(query_city.as_str()) {
		return true;
	}
	if !candidate_city.is_empty() && normalized_query.contains(candidate_city.as_str()) {
		return true;
	}

	false
}
