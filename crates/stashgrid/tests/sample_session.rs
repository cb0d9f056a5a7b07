//! Integration test: a session over the bundled sample catalog, driven
//! through the event bus the way the UI layer drives it.

use stashgrid::catalog::SocketColour;
use stashgrid::ui::{style, GridPlacement, PlacementError, SectionKind, TooltipPlacement};
use stashgrid::{EventBus, StashConfig, StashEvent, StashSession};

fn sample_session() -> StashSession {
    StashSession::from_config(&StashConfig::default()).unwrap()
}

fn select(session: &mut StashSession, tab_id: &str) {
    session.apply(StashEvent::SelectTab(tab_id.into()));
}

#[test]
fn test_sample_opens_on_currency_tab() {
    let frame = sample_session().frame();

    assert_eq!(frame.tab_name.as_deref(), Some("Currency"));
    assert_eq!(frame.item_ids(), vec!["curr1", "curr2", "curr3"]);
    assert_eq!(frame.tabs.len(), 3);
    assert!(frame.tabs[0].tint.is_some());
    assert!(frame.rejected.is_empty());
}

#[test]
fn test_gear_tab_rejects_overlapping_chainmail() {
    let mut session = sample_session();
    select(&mut session, "tab2");
    let frame = session.frame();

    assert_eq!(
        frame.rejected,
        vec![PlacementError::Overlap {
            item_id: "gear3".into(),
            other_id: "gear2".into(),
        }]
    );
    assert!(frame.cell("gear3").is_none());
    assert_eq!(
        frame.cell("gear1").unwrap().placement,
        GridPlacement {
            column_start: 1,
            row_start: 1,
            column_span: 2,
            row_span: 3,
        }
    );
    assert_eq!(frame.items.len(), 10);
    assert_eq!(frame.rows, 7);
}

#[test]
fn test_category_filters_on_gear_tab() {
    let mut session = sample_session();
    select(&mut session, "tab2");

    session.apply(StashEvent::CategoryChanged("flask".into()));
    assert_eq!(session.frame().item_ids(), vec!["flask1"]);

    session.apply(StashEvent::CategoryChanged("map".into()));
    assert_eq!(session.frame().item_ids(), vec!["map1"]);

    session.apply(StashEvent::CategoryChanged("gem".into()));
    assert_eq!(session.frame().item_ids(), vec!["gem1"]);

    session.apply(StashEvent::CategoryChanged("equipment".into()));
    assert_eq!(
        session.frame().item_ids(),
        vec!["gear1", "gear2", "gear4", "gear5", "gear6", "jewel1", "clusterJewel1"]
    );
}

#[test]
fn test_rarity_filter_on_gear_tab() {
    let mut session = sample_session();
    select(&mut session, "tab2");

    session.apply(StashEvent::RarityChanged("unique".into()));
    assert_eq!(session.frame().item_ids(), vec!["gear1"]);

    session.apply(StashEvent::RarityChanged("normal".into()));
    // gear3 is Normal too but was rejected by the grid.
    assert_eq!(session.frame().item_ids(), vec!["gear5"]);
}

#[test]
fn test_batched_keystrokes_serve_final_query() {
    let mut session = sample_session();
    let (sender, receiver) = EventBus::create_pair(64);
    let runs_before = session.filter_runs();

    sender.send(StashEvent::SearchChanged("e".into()));
    sender.send(StashEvent::SearchChanged("ex".into()));
    sender.send(StashEvent::RarityChanged("all".into()));
    sender.send(StashEvent::SearchChanged("exalted".into()));
    session.pump(&receiver);

    assert_eq!(session.frame().item_ids(), vec!["curr1"]);
    assert_eq!(session.filter_runs(), runs_before + 1);
}

#[test]
fn test_hover_shows_detail_panel_inside_viewport() {
    let mut session = sample_session();
    select(&mut session, "tab2");

    session.apply(StashEvent::PointerEntered {
        item_id: "gear4".into(),
        x: 1900.0,
        y: 100.0,
    });
    session.apply(StashEvent::PanelMeasured {
        width: 200.0,
        height: 400.0,
    });

    let frame = session.frame();
    let sockets = &frame.cell("gear4").unwrap().sockets;
    assert_eq!(sockets.len(), 2);
    assert_eq!(sockets[0].len(), 4);
    assert_eq!(sockets[0][3], style::socket(SocketColour::White));
    assert_eq!(sockets[1][0], style::socket(SocketColour::Blue));

    let view = frame.tooltip.unwrap();
    assert_eq!(view.placement, TooltipPlacement { left: 1680.0, top: 120.0 });
    assert_eq!(
        view.detail.lines(SectionKind::Header),
        vec!["Socketed Greathelm", "Ezomyte Burgonet", "Shaper Influence"]
    );
    assert_eq!(view.detail.lines(SectionKind::Sockets), vec!["Sockets: R-G-B-W B-R"]);
}

#[test]
fn test_kaom_detail_text() {
    let mut session = sample_session();
    select(&mut session, "tab2");
    session.apply(StashEvent::PointerEntered {
        item_id: "gear1".into(),
        x: 100.0,
        y: 100.0,
    });

    let detail = session.frame().tooltip.unwrap().detail;
    assert_eq!(
        detail.lines(SectionKind::ExplicitMods),
        vec![
            "+500 to maximum Life",
            "(40-50)% increased Fire Damage",
            "(Crafted) +25 to Strength",
        ]
    );
    assert_eq!(detail.lines(SectionKind::Quality), vec!["Quality: +20%"]);
    assert_eq!(detail.lines(SectionKind::ImplicitMods), vec!["Has no Sockets"]);
}

#[test]
fn test_divination_card_stack() {
    let mut session = sample_session();
    select(&mut session, "tab3");

    let frame = session.frame();
    assert_eq!(frame.cell("div1").unwrap().stack_badge, Some(3));

    session.apply(StashEvent::PointerEntered {
        item_id: "div1".into(),
        x: 50.0,
        y: 50.0,
    });
    let detail = session.frame().tooltip.unwrap().detail;
    assert_eq!(detail.lines(SectionKind::StackSize), vec!["Stack Size: 3 / 8"]);
}

#[test]
fn test_tab_switch_hides_tooltip() {
    let mut session = sample_session();
    session.apply(StashEvent::PointerEntered {
        item_id: "curr1".into(),
        x: 50.0,
        y: 50.0,
    });
    assert!(session.frame().tooltip_visible());

    select(&mut session, "tab3");
    assert!(!session.frame().tooltip_visible());
}
