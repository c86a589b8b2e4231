//! Search tag and makeup keyword tables

use morphology::{EyeShape, LipFullness, NoseWidth};

use crate::FeatureSet;

fn base_eye_keywords(shape: EyeShape) -> &'static [&'static str] {
    match shape {
        EyeShape::Almond => &["winged eyeliner", "cat eye", "smokey eye"],
        EyeShape::Round => &["elongating", "lengthening", "outer corner emphasis"],
        EyeShape::Monolid => &["monolid tutorial", "tightlining", "gradient eye"],
        EyeShape::Hooded => &["hooded eye tutorial", "cut crease", "halo eye"],
        EyeShape::Upturned | EyeShape::Downturned => &[],
    }
}

fn nose_keywords_for(width: NoseWidth) -> &'static [&'static str] {
    match width {
        NoseWidth::Narrow => &["highlight bridge", "widen nose", "side highlight"],
        NoseWidth::Medium => &["natural contour", "subtle definition"],
        NoseWidth::Wide => &["slim nose", "nose contour", "bridge highlight"],
    }
}

fn lip_keywords_for(fullness: LipFullness) -> &'static [&'static str] {
    match fullness {
        LipFullness::Thin => &["plump lips", "lip liner", "overlining", "fuller lips"],
        LipFullness::Medium => &["natural lip", "lip definition"],
        LipFullness::Full => &["full lips", "matte lipstick", "lip stain"],
    }
}

fn has_eye_shape(features: &FeatureSet, shape: EyeShape) -> bool {
    features.eye_shape == shape || features.eye_secondary.contains(&shape)
}

pub(crate) fn eye_keywords(features: &FeatureSet) -> Vec<String> {
    let mut keywords = vec![features.eye_shape.to_string(), "eye makeup".into(), "eyeshadow".into()];
    keywords.extend(base_eye_keywords(features.eye_shape).iter().map(|k| k.to_string()));

    if has_eye_shape(features, EyeShape::Upturned) {
        keywords.extend(["upturned", "lifted", "fox eye"].map(String::from));
    } else if has_eye_shape(features, EyeShape::Downturned) {
        keywords.extend(["downturned", "puppy eye", "lifting technique"].map(String::from));
    }
    dedup_ordered(keywords)
}

pub(crate) fn nose_keywords(features: &FeatureSet) -> Vec<String> {
    let mut keywords = vec![
        features.nose_width.to_string(),
        "nose contour".into(),
        "nose makeup".into(),
    ];
    keywords.extend(nose_keywords_for(features.nose_width).iter().map(|k| k.to_string()));
    dedup_ordered(keywords)
}

pub(crate) fn lip_keywords(features: &FeatureSet) -> Vec<String> {
    let mut keywords = vec![
        features.lip_fullness.to_string(),
        "lip makeup".into(),
        "lipstick".into(),
    ];
    keywords.extend(lip_keywords_for(features.lip_fullness).iter().map(|k| k.to_string()));

    if features.lip_balance.favors_upper() {
        keywords.push("balance lower lip".into());
    } else if features.lip_balance.favors_lower() {
        keywords.push("balance upper lip".into());
    }
    dedup_ordered(keywords)
}

/// Search tags, most specific combination first
pub(crate) fn search_tags(features: &FeatureSet) -> Vec<String> {
    let eye = features.eye_shape;
    let nose = features.nose_width;
    let lip = features.lip_fullness;

    let mut tags = vec![
        format!("{eye} eyes {nose} nose {lip} lips"),
        format!("{eye} eye makeup"),
        format!("{nose} nose makeup"),
        format!("{lip} lips makeup"),
    ];
    tags.extend(features.eye_secondary.iter().map(|s| format!("{s} eyes makeup")));
    tags.push(match features.eye_secondary.first() {
        Some(secondary) => format!("{eye} {secondary} eyes"),
        None => format!("{eye} eyes"),
    });
    tags.push(format!("makeup for {nose} nose"));
    tags.push(format!("makeup for {lip} lips"));
    tags.extend(technique_tags(features));

    dedup_ordered(tags)
}

fn technique_tags(features: &FeatureSet) -> Vec<String> {
    let mut techniques = Vec::new();
    match features.eye_shape {
        EyeShape::Hooded => techniques.push("cut crease tutorial".to_string()),
        EyeShape::Monolid => techniques.push("monolid eyeshadow technique".to_string()),
        EyeShape::Round => techniques.push("elongating eye makeup".to_string()),
        _ => {}
    }
    techniques.push(format!("{} nose contour tutorial", features.nose_width));
    match features.lip_fullness {
        LipFullness::Thin => techniques.push("lip plumping technique".to_string()),
        LipFullness::Full => techniques.push("full lip makeup tutorial".to_string()),
        LipFullness::Medium => {}
    }
    techniques
}

/// Drop repeated entries, keeping the first occurrence
fn dedup_ordered(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphology::LipBalance;

    fn features(eye: EyeShape, secondary: Vec<EyeShape>) -> FeatureSet {
        FeatureSet {
            eye_shape: eye,
            eye_secondary: secondary,
            nose_width: NoseWidth::Wide,
            lip_fullness: LipFullness::Thin,
            lip_balance: LipBalance::LowerDominant,
        }
    }

    #[test]
    fn test_dedup_keeps_first() {
        let items = ["a", "b", "a", "c", "b"].map(String::from).to_vec();
        assert_eq!(dedup_ordered(items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_wide_nose_keywords_have_no_duplicates() {
        let kw = nose_keywords(&features(EyeShape::Almond, vec![]));
        assert_eq!(
            kw,
            vec!["wide", "nose contour", "nose makeup", "slim nose", "bridge highlight"]
        );
    }

    #[test]
    fn test_directional_keywords_from_primary_or_secondary() {
        let primary = eye_keywords(&features(EyeShape::Upturned, vec![EyeShape::Almond]));
        assert_eq!(primary, vec!["Upturned", "eye makeup", "eyeshadow", "upturned", "lifted", "fox eye"]);

        let secondary = eye_keywords(&features(EyeShape::Hooded, vec![EyeShape::Downturned]));
        assert!(secondary.contains(&"halo eye".to_string()));
        assert!(secondary.ends_with(&["downturned", "puppy eye", "lifting technique"].map(String::from)));
    }

    #[test]
    fn test_lip_balance_keyword() {
        let kw = lip_keywords(&features(EyeShape::Almond, vec![]));
        assert_eq!(kw.first().map(String::as_str), Some("thin"));
        assert_eq!(kw.last().map(String::as_str), Some("balance upper lip"));
    }

    #[test]
    fn test_tag_order() {
        let tags = search_tags(&features(EyeShape::Hooded, vec![EyeShape::Upturned]));
        assert_eq!(
            tags,
            vec![
                "Hooded eyes wide nose thin lips",
                "Hooded eye makeup",
                "wide nose makeup",
                "thin lips makeup",
                "Upturned eyes makeup",
                "Hooded Upturned eyes",
                "makeup for wide nose",
                "makeup for thin lips",
                "cut crease tutorial",
                "wide nose contour tutorial",
                "lip plumping technique",
            ]
        );
    }

    #[test]
    fn test_combination_tag_without_secondary() {
        let tags = search_tags(&features(EyeShape::Almond, vec![]));
        assert_eq!(tags[4], "Almond eyes");
    }
}
