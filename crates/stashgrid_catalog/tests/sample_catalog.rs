//! Integration test: the bundled sample catalog loads and keeps its shape.

use stashgrid_catalog::{
    link_groups, Catalog, FrameType, Influence, ModKind, NumericValue, TabKind,
};

const SAMPLE: &str = include_str!("../../stashgrid/data/stash.toml");

#[test]
fn test_sample_catalog_loads() {
    let catalog = Catalog::from_toml_str(SAMPLE).unwrap();

    let names: Vec<&str> = catalog.tabs().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Currency", "Gear", "Div Cards"]);
    assert_eq!(catalog.item_count(), 15);
    assert_eq!(catalog.tab("tab2").unwrap().kind, TabKind::Premium);
    assert_eq!(catalog.tab("tab1").unwrap().colour.unwrap().g, 215);
}

#[test]
fn test_sample_modifiers_parse() {
    let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
    let (tab, kaom) = catalog.find_item("gear1").unwrap();

    assert_eq!(tab.id, "tab2");
    assert_eq!(kaom.frame_type, FrameType::Unique);
    assert_eq!(kaom.explicit_mods.len(), 3);
    assert_eq!(
        kaom.explicit_mods[0].numeric_value,
        Some(NumericValue::Single(500.0))
    );
    assert_eq!(
        kaom.explicit_mods[1].numeric_value,
        Some(NumericValue::Range(40.0, 50.0))
    );
    assert_eq!(kaom.explicit_mods[1].value_suffix.as_deref(), Some("%"));
    assert_eq!(kaom.explicit_mods[2].kind, Some(ModKind::Crafted));
    assert_eq!(kaom.implicit_mods[0].numeric_value, None);
}

#[test]
fn test_sample_sockets_and_influence() {
    let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
    let (_, helm) = catalog.find_item("gear4").unwrap();

    assert_eq!(helm.influence, Some(Influence::Shaper));
    let groups = link_groups(&helm.sockets);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 4);
    assert_eq!(groups[0][3].attr, None);
}

#[test]
fn test_sample_optional_fields_absent() {
    let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
    let (_, gem) = catalog.find_item("gem1").unwrap();

    assert_eq!(gem.stack_size, None);
    assert_eq!(gem.influence, None);
    assert!(gem.sockets.is_empty());
    assert!(gem.explicit_mods.is_empty());
    assert_eq!(gem.properties[1].kind, Some(6));
    assert!(gem.properties[0].values[0].is_augmented());
}
