use regex::Regex;

use crate::cim::{CimError, PatternKind, Result};

/// Compiled full-match name filter.
///
/// The source pattern is anchored on both ends at compile time, so
/// [`NamePattern::matches`] asks whether the candidate in its entirety
/// satisfies the pattern, never whether it merely contains a match.
#[derive(Debug, Clone)]
pub struct NamePattern {
	regex: Regex,
}

impl NamePattern {
	/// Compile `pattern` as a full-match filter for `which` names.
	pub fn compile(which: PatternKind, pattern: &str) -> Result<Self> {
		let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| CimError::InvalidPattern { which, source })?;
		Ok(Self { regex })
	}

	/// Return `true` when the whole of `candidate` satisfies the pattern.
	pub fn matches(&self, candidate: &str) -> bool {
		self.regex.is_match(candidate)
	}
}

#[cfg(test)]
mod tests {
	use crate::cim::{CimError, NamePattern, PatternKind};

	#[test]
	fn matches_whole_string_only() {
		let pattern = NamePattern::compile(PatternKind::Class, "Win32.*Processor").expect("pattern compiles");
		assert!(pattern.matches("Win32_Processor"));
		assert!(pattern.matches("Win32_PerfFormattedData_Processor"));
		assert!(!pattern.matches("Win32_ProcessorExtras"));
		assert!(!pattern.matches("xWin32_Processor"));
	}

	#[test]
	fn plain_name_does_not_match_substring() {
		let pattern = NamePattern::compile(PatternKind::Property, "Load").expect("pattern compiles");
		assert!(pattern.matches("Load"));
		assert!(!pattern.matches("LoadPercentage"));
	}

	#[test]
	fn unbalanced_group_fails_with_invalid_pattern() {
		let err = NamePattern::compile(PatternKind::Class, "(Win32").expect_err("pattern should not compile");
		match err {
			CimError::InvalidPattern { which, .. } => assert_eq!(which, PatternKind::Class),
			other => panic!("unexpected error: {other}"),
		}
	}
}
