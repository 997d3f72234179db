//! List command implementation

use anyhow::Result;
use perkladar_core::{Case, Number};

use super::ListCommands;

const NUMBERS: [(Number, &str); 3] = [
    (Number::Singular, "sg"),
    (Number::Dual, "du"),
    (Number::Plural, "pl"),
];

fn case_abbreviation(case: Case) -> &'static str {
    match case {
        Case::Nominative => "nom",
        Case::Genitive => "gen",
        Case::Dative => "dat",
        Case::Accusative => "acc",
        Case::Instrumental => "ins",
        Case::Locative => "loc",
        Case::Vocative => "voc",
    }
}

/// Execute a list subcommand
pub fn execute(subcommand: ListCommands) -> Result<()> {
    print!("{}", render(subcommand));
    Ok(())
}

fn render(subcommand: ListCommands) -> String {
    let mut out = String::new();
    match subcommand {
        ListCommands::Cases => {
            out.push_str("Cases:\n");
            for case in Case::ALL {
                let note = if case == Case::Locative {
                    "  (forced after w, we, v)"
                } else {
                    ""
                };
                out.push_str(&format!("  {:<14}{}{note}\n", case, case_abbreviation(case)));
            }
            out.push_str("\nNumbers:\n");
            for (number, abbreviation) in NUMBERS {
                out.push_str(&format!("  {number:<14}{abbreviation}\n"));
            }
        }
        ListCommands::Formats => {
            out.push_str("Available output formats:\n");
            out.push_str("  text      - One translated line per input line (default)\n");
            out.push_str("  json      - JSON array with line numbers and optional token detail\n");
            out.push_str("  markdown  - Table of source and translated lines\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cases_listing() {
        let out = render(ListCommands::Cases);
        assert!(out.starts_with("Cases:\n"));
        assert!(out.contains("  locative      loc  (forced after w, we, v)\n"));
        assert!(out.contains("  instrumental  ins\n"));
        assert!(out.contains("  dual          du\n"));
    }

    #[test]
    fn test_abbreviations_parse_back() {
        for case in Case::ALL {
            assert_eq!(case_abbreviation(case).parse::<Case>().unwrap(), case);
        }
        for (number, abbreviation) in NUMBERS {
            assert_eq!(abbreviation.parse::<Number>().unwrap(), number);
        }
    }

    #[test]
    fn test_formats_listing() {
        let out = render(ListCommands::Formats);
        for name in ["text", "json", "markdown"] {
            assert!(out.contains(&format!("  {name} ")));
        }
        assert!(execute(ListCommands::Formats).is_ok());
    }
}
