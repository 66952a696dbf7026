use anyhow::Result;
use solid_showcase::adapters::{InMemoryUserStore, RegexEmailValidator};
use solid_showcase::domain::model::{SignupRequest, User};
use solid_showcase::principles::{self, srp};
use solid_showcase::{DemoRunner, Principle, ShowcaseConfig, Variant};

#[test]
fn test_signup_scenario() -> Result<()> {
    let validator = RegexEmailValidator::new()?;
    let store = InMemoryUserStore::new();

    srp::validate_request(&validator, &store, &SignupRequest::new("Ada", "ada@example.com"))?;
    srp::validate_request(&validator, &store, &SignupRequest::new("Bob", "not-an-email"))?;

    assert_eq!(
        store.users(),
        vec![User {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }]
    );
    Ok(())
}

#[test]
fn test_full_run_with_default_samples() -> Result<()> {
    let config = ShowcaseConfig::default();
    let transcript = DemoRunner::new(principles::catalog(&config)?).run()?;

    // Both halves of the signup demo skip Bob.
    for variant in [Variant::Flawed, Variant::Improved] {
        assert_eq!(
            transcript.lines_for(Principle::Srp, variant),
            vec!["Created user Ada <ada@example.com> in the database"]
        );
    }

    assert_eq!(
        transcript.lines_for(Principle::Ocp, Variant::Flawed),
        vec!["London", "Paris", "Tokyo"]
    );
    assert_eq!(
        transcript.lines_for(Principle::Ocp, Variant::Improved),
        vec![
            "London",
            "Paris",
            "Tokyo",
            "England: London",
            "France: Paris",
            "Japan: Tokyo"
        ]
    );

    // Substitutability only has the flawed half.
    assert!(transcript
        .lines_for(Principle::Lsp, Variant::Improved)
        .is_empty());
    let lsp = transcript.lines_for(Principle::Lsp, Variant::Flawed);
    assert_eq!(lsp.len(), 3);
    assert!(lsp[2].contains("expected basic, found withheld"));

    assert_eq!(
        transcript.lines_for(Principle::Isp, Variant::Improved),
        vec!["Sum: 50", "Invoice #42: 50"]
    );
    assert_eq!(
        transcript.lines_for(Principle::Dip, Variant::Improved),
        vec!["4 wheels are rolling", "V6 engine is running"]
    );
    Ok(())
}

#[test]
fn test_filtered_run_keeps_catalog_order() -> Result<()> {
    let transcript = DemoRunner::new(principles::catalog(&ShowcaseConfig::default())?)
        .with_filter(vec![Principle::Dip, Principle::Srp])
        .run()?;

    let mut seen: Vec<Principle> = transcript.entries.iter().map(|e| e.principle).collect();
    seen.dedup();
    assert_eq!(seen, vec![Principle::Srp, Principle::Dip]);
    Ok(())
}
