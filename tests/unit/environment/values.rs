use super::*;

struct Scale;

impl EnvironmentKey for Scale {
    const NAME: &'static str = "display_scale";
    type Value = f64;

    fn default_value() -> f64 {
        1.0
    }
}

struct Locale;

impl EnvironmentKey for Locale {
    const NAME: &'static str = "locale";
    type Value = String;

    fn default_value() -> String {
        "en".to_string()
    }
}

#[test]
fn unset_keys_read_their_default() {
    let env = Environment::empty();
    assert!(env.is_empty());
    assert_eq!(env.get::<Scale>(), 1.0);
    assert_eq!(env.try_get::<Locale>().unwrap(), None);
}

#[test]
fn with_is_copy_on_write() {
    let base = Environment::empty();
    let scaled = base.with::<Scale>(2.0).unwrap();
    assert_eq!(base.get::<Scale>(), 1.0);
    assert_eq!(scaled.get::<Scale>(), 2.0);
    assert_eq!(scaled.len(), 1);
    assert_ne!(base, scaled);
}

#[test]
fn fingerprint_tracks_contents_not_history() {
    let a = Environment::empty()
        .with::<Scale>(2.0)
        .unwrap()
        .with::<Locale>("fr".to_string())
        .unwrap();
    let b = Environment::empty()
        .with::<Locale>("fr".to_string())
        .unwrap()
        .with::<Scale>(2.0)
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());

    let c = a.with::<Locale>("de".to_string()).unwrap();
    assert_ne!(a.fingerprint(), c.fingerprint());

    let mut d = c.clone();
    assert!(d.remove::<Locale>());
    assert!(!d.remove::<Locale>());
    assert_eq!(
        d.fingerprint(),
        Environment::empty().with::<Scale>(2.0).unwrap().fingerprint()
    );
}

#[test]
fn mismatched_value_shape_is_reported_and_defaulted() {
    struct ScaleAsText;
    impl EnvironmentKey for ScaleAsText {
        const NAME: &'static str = "display_scale";
        type Value = String;
        fn default_value() -> String {
            String::new()
        }
    }

    let env = Environment::empty().with::<ScaleAsText>("big".to_string()).unwrap();
    assert!(matches!(
        env.try_get::<Scale>(),
        Err(TrellisError::Environment(_))
    ));
    assert_eq!(env.get::<Scale>(), 1.0);
}

#[test]
fn raw_values_match_typed_ones() {
    let raw = Environment::from_values(BTreeMap::from([(
        "display_scale".to_string(),
        serde_json::json!(2.0),
    )]));
    let typed = Environment::empty().with::<Scale>(2.0).unwrap();
    assert_eq!(raw, typed);
    assert_eq!(raw.fingerprint(), typed.fingerprint());
    assert_eq!(raw.get::<Scale>(), 2.0);
}

#[test]
fn derived_environments_share_the_measurement_cache() {
    use crate::{
        constraint::size_constraint::SizeConstraint, content::cache::MeasurementCachingKey,
        foundation::core::Size,
    };

    let base = Environment::empty();
    let derived = base.with::<Scale>(2.0).unwrap();
    let key = MeasurementCachingKey::new("Label", 1u8);
    derived
        .measurement_cache()
        .cached_measure(&key, SizeConstraint::UNCONSTRAINED, &derived, || Size::ZERO);
    assert_eq!(base.measurement_cache().len(), 1);
    assert_eq!(base.clone().measurement_cache().len(), 1);

    let isolated = base.with_fresh_measurement_cache();
    assert!(isolated.measurement_cache().is_empty());
    assert_eq!(isolated, base);
}
