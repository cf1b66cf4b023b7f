//! Classification scenarios across the public surface

use crate::{is_secret, is_secret_name, ScalarKind, Secrecy, SecrecyTag, TypeDescriptor};

/// Model a parameter annotation the way the translator sees one after the
/// type-hint boundary: sometimes a live tag, sometimes text, sometimes gone.
enum Annotation {
    Hint(SecrecyTag),
    Text(String),
    Missing,
}

fn classify(annotation: &Annotation) -> bool {
    match annotation {
        Annotation::Hint(tag) => is_secret(TypeDescriptor::Tag(*tag)),
        Annotation::Text(name) => is_secret(TypeDescriptor::Name(name)),
        Annotation::Missing => is_secret(TypeDescriptor::Other),
    }
}

#[test]
fn test_annotated_parameters() {
    let params = [
        (
            Annotation::Hint(SecrecyTag::Scalar(Secrecy::NonSecret, ScalarKind::Int)),
            false,
        ),
        (
            Annotation::Hint(SecrecyTag::Vector(Secrecy::Secret, ScalarKind::Int)),
            true,
        ),
        (Annotation::Text("NonSecretInt".to_string()), false),
        (Annotation::Text("SecretInt".to_string()), true),
        (Annotation::Missing, true),
    ];

    for (annotation, expect_secret) in &params {
        assert_eq!(classify(annotation), *expect_secret);
    }
}

#[test]
fn test_generic_markers() {
    assert!(is_secret(TypeDescriptor::Tag(SecrecyTag::Generic(
        Secrecy::Secret
    ))));
    assert!(!is_secret(TypeDescriptor::Tag(SecrecyTag::Generic(
        Secrecy::NonSecret
    ))));
    assert!(is_secret_name("Secret"));
    assert!(!is_secret_name("NonSecret"));
}

#[test]
fn test_foreign_annotations_stay_secret() {
    // Names from the host type system, not from this vocabulary
    for name in ["int", "float", "list[int]", "MyClass", "Optional[SecretInt]"] {
        assert!(is_secret_name(name), "{name} should classify as secret");
    }
}

#[test]
fn test_vocabulary_split() {
    // Exactly half the vocabulary classifies as non-secret
    let (secret, non_secret): (Vec<&SecrecyTag>, Vec<&SecrecyTag>) =
        SecrecyTag::ALL.iter().partition(|t| t.is_secret());
    assert_eq!(secret.len(), 13);
    assert_eq!(non_secret.len(), 13);
    assert!(secret.iter().all(|t| !t.secrecy().is_non_secret()));
    assert!(non_secret.iter().all(|t| t.secrecy().is_non_secret()));
}

#[test]
fn test_text_and_value_paths_agree() {
    for tag in SecrecyTag::ALL {
        assert_eq!(
            is_secret(TypeDescriptor::Tag(tag)),
            is_secret_name(tag.name()),
            "{tag}: tag-value and name classification diverged"
        );
    }
}

#[test]
fn test_tags_survive_serialization() {
    // Hints serialized across the boundary classify identically after
    // deserialization
    for tag in [
        SecrecyTag::Generic(Secrecy::Secret),
        SecrecyTag::Scalar(Secrecy::NonSecret, ScalarKind::String),
        SecrecyTag::Vector(Secrecy::Secret, ScalarKind::Double),
    ] {
        let json = serde_json::to_string(&tag).unwrap();
        let back: SecrecyTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back.is_secret(), tag.is_secret());
    }
}
