//! End-to-end token generation from hue files and project manifests.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use swatch::discovery::discover;
use swatch::parser::parse_hues_file;
use swatch::shadow::{shadows, static_shadows, ShadowOutput, ShadowParams};
use swatch::types::dark_name;
use swatch::{generate, BuiltinHues, GenerateOptions, HueSampleSet, MixMode, TokenTable};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn brand_sets() -> Vec<HueSampleSet> {
    parse_hues_file(&fixture("brand.hues.md")).unwrap()
}

fn brand_table() -> TokenTable {
    generate(&brand_sets(), &GenerateOptions::default()).unwrap()
}

#[test]
fn fixture_parses_into_two_families() {
    let names: Vec<String> = brand_sets()
        .iter()
        .map(|s| s.name().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["brand", "accent"]);
}

#[test]
fn primary_is_the_most_vivid_sample() {
    let table = brand_table();
    assert_eq!(table.get("--brand-hsl"), Some("262 70% 48%"));
    assert_eq!(table.get("--brand-0-hsl"), Some("262 70% 48%"));
    assert_eq!(table.get("--accent-hsl-@media:dark"), Some("24 92% 48%"));
}

#[test]
fn light_mode_steps() {
    let table = brand_table();

    assert_eq!(table.get("--brand-1-hsl"), Some("262 70% 34%"));
    assert_eq!(table.get("--brand-4-hsl"), Some("262 50% 14%"));
    assert_eq!(
        table.get("--brand-5-hsl"),
        Some("color-mix(in oklch, hsl(262 50% 14%), var(--base-black) 5%)")
    );
    assert_eq!(
        table.get("--brand-10-hsl"),
        Some("color-mix(in oklch, hsl(262 50% 14%), var(--base-black) 30%)")
    );

    assert_eq!(table.get("--brand--1-hsl"), Some("262 70% 48%"));
    assert_eq!(table.get("--brand--8-hsl"), Some("262 50% 97%"));
    assert_eq!(
        table.get("--brand--9-hsl"),
        Some("color-mix(in oklch, hsl(262 50% 97%), var(--base-white) 5%)")
    );
    assert_eq!(
        table.get("--brand--10-hsl"),
        Some("color-mix(in oklch, hsl(262 50% 97%), var(--base-white) 10%)")
    );
}

#[test]
fn dark_mode_swaps_shades_and_tints() {
    let table = brand_table();

    for step in 1..=10 {
        let shade = format!("--brand-{}-hsl", step);
        let tint = format!("--brand--{}-hsl", step);
        assert_eq!(table.get(&dark_name(&shade)), table.get(&tint), "{}", shade);
        assert_eq!(table.get(&dark_name(&tint)), table.get(&shade), "{}", tint);
    }
}

#[test]
fn every_token_has_a_dark_counterpart_except_shadow_recipes() {
    let table = brand_table();

    for name in table.names() {
        let recipe = (name.starts_with("--shadow-")
            && !name.starts_with("--shadow-color")
            && !name.starts_with("--shadow-strength"))
            || (name.starts_with("--inner-shadow-") && name != "--inner-shadow-highlight");
        if recipe || name.ends_with("-@media:dark") || name.starts_with("--base-") {
            continue;
        }
        assert!(table.contains(&dark_name(name)), "{} has no dark value", name);
    }
}

#[test]
fn mono_scales_and_references() {
    let table = brand_table();

    assert_eq!(table.get("--base-white"), Some("hsl(0 0% 100%)"));
    assert_eq!(table.get("--base-black"), Some("hsl(0 0% 0%)"));
    assert_eq!(table.get("--color-black-0"), Some("hsl(0 0% 0%)"));
    assert_eq!(table.get("--color-black-10"), Some("hsl(0 0% 95%)"));
    assert_eq!(table.get("--color-black-10-@media:dark"), Some("hsl(0 0% 5%)"));
    assert_eq!(table.get("--color-white-0"), Some("hsl(0 0% 100%)"));
    assert_eq!(table.get("--color-white-10-@media:dark"), Some("hsl(0 0% 50%)"));
    assert_eq!(table.get("--color-black-0-@media:dark"), table.get("--color-white-0"));
    assert_eq!(table.get("--color-white-0-@media:dark"), table.get("--color-black-0"));
}

#[test]
fn table_size() {
    // 2 references, 2 families of 44, 44 mono tokens, 27 shadow tokens
    assert_eq!(brand_table().len(), 2 + 2 * 44 + 44 + 27);
}

#[test]
fn generation_is_deterministic() {
    let a = brand_table().to_json().unwrap();
    let b = brand_table().to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn resolved_mode_has_no_mix_expressions() {
    let options = GenerateOptions {
        mix: MixMode::Resolved,
        ..Default::default()
    };
    let table = generate(&brand_sets(), &options).unwrap();

    assert!(table.iter().all(|(_, v)| !v.contains("color-mix")));
    assert_eq!(table.get("--brand-4-hsl"), Some("262 50% 14%"));
}

#[test]
fn static_output_matches_static_shadows() {
    let options = GenerateOptions {
        shadows: ShadowOutput::Static,
        ..Default::default()
    };
    let table = generate(&brand_sets(), &options).unwrap();
    let expected = static_shadows(&shadows(&ShadowParams::light(), &ShadowParams::dark()));

    for (name, value) in expected.iter() {
        assert_eq!(table.get(name), Some(value), "{}", name);
    }
    assert!(!table.contains("--shadow-color"));
    assert!(!table.contains("--shadow-strength"));
}

#[test]
fn colliding_families_fail_without_partial_output() {
    let mut sets = brand_sets();
    sets.extend(BuiltinHues::get("red"));
    sets.extend(brand_sets());

    assert!(generate(&sets, &GenerateOptions::default()).is_err());
}

#[test]
fn project_manifest_drives_generation() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("palettes")).unwrap();
    fs::copy(fixture("brand.hues.md"), dir.path().join("palettes/brand.hues.md")).unwrap();
    fs::write(
        dir.path().join("swatch.yaml"),
        r#"
sources:
  - palettes
only: [accent]
shadows: static
shadow_light:
  color: "0 0% 0%"
  strength: "4%"
"#,
    )
    .unwrap();

    let discovery = discover(dir.path()).unwrap();
    let table = generate(&discovery.load_sets().unwrap(), &discovery.options()).unwrap();

    assert!(table.contains("--accent-hsl"));
    assert!(!table.contains("--brand-hsl"));
    assert_eq!(
        table.get("--shadow-1"),
        Some("0 1px 2px -1px hsl(0 0% 0% / calc(4% + 9%))")
    );
}

#[test]
fn fractional_samples_are_emitted_as_written() {
    let source: String = (0..13)
        .map(|i| match i {
            12 => "--ember-12-hsl: 12.5 50.4% 6.5%\n".to_string(),
            _ => format!("--ember-{}-hsl: 12 80% {}%\n", i, 96 - i * 7),
        })
        .collect();
    let sets = swatch::parse_hues(&source).unwrap();
    let table = generate(&sets, &GenerateOptions::default()).unwrap();

    assert_eq!(table.get("--ember-4-hsl"), Some("12.5 50.4% 6.5%"));
    assert_eq!(
        table.get("--ember-5-hsl"),
        Some("color-mix(in oklch, hsl(12.5 50.4% 6.5%), var(--base-black) 5%)")
    );
}
