// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a duration in seconds into a human-readable `M:SS` string.
///
/// Minutes are not padded and keep counting past the hour, matching how
/// track lengths are usually written.
///
/// # Arguments
///
/// * `total_seconds` - The duration to format.
pub(crate) fn format_duration(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Pluralised result count, e.g. `1 result found`.
pub(crate) fn result_count(count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("{count} {noun} found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(213), "3:33");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn result_counts() {
        assert_eq!(result_count(1), "1 result found");
        assert_eq!(result_count(3), "3 results found");
    }
}
