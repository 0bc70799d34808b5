use party_draft::{TeamColor, verify_roster};

use crate::draft::read_roster;


pub fn run(roster_file: &str, colors: &[TeamColor]) -> anyhow::Result<()> {
    let roster = read_roster(roster_file)?;
    let status = verify_roster(&roster, colors);
    for warning in &status.warnings {
        eprintln!("Warning: {warning:?}");
    }
    match status.error {
        None => {
            println!("OK: {} player(s), {} team(s)", roster.len(), colors.len());
            Ok(())
        }
        Some(err) => anyhow::bail!("Invalid roster {roster_file}: {err:?}"),
    }
}
