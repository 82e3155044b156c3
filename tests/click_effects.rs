//! Integration tests for the click particle effect.
//!
//! These drive the emitter through a [`Document`] the same way the page
//! does and check the ranges, palette and cleanup of every burst.

use std::time::Duration;

use folio::effect::{palette, EffectEmitter, EffectSettings, Lcg};
use folio::event::ClickListener;
use folio::{ClickTarget, Document, MemoryStorage, PointerButton, PointerEvent, Portfolio};
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn seeded(seed: u64) -> EffectEmitter {
    EffectEmitter::with_rng(EffectSettings::default(), Box::new(Lcg::seeded(seed)))
}

proptest! {
    #[test]
    fn burst_sizes_and_colors_in_range(
        seed in any::<u64>(),
        x in 0.0f64..1920.0,
        y in 0.0f64..1080.0,
    ) {
        let mut doc = Document::new();
        let mut fx = seeded(seed);
        fx.on_click(&PointerEvent::primary(x, y), ms(0), &mut doc);

        let count = doc.element_count();
        prop_assert!((2..=4).contains(&count));
        for particle in fx.live() {
            prop_assert!((8..=22).contains(&particle.size));
            prop_assert!(palette::contains(&particle.color));
        }
    }

    #[test]
    fn every_particle_gone_within_a_second(
        seed in any::<u64>(),
        clicks in prop::collection::vec((0u64..2000, 0.0f64..800.0, 0.0f64..600.0), 1..8),
    ) {
        let mut doc = Document::new();
        let mut fx = seeded(seed);
        let mut last = 0;
        for (at, x, y) in &clicks {
            fx.advance(ms(*at), &mut doc);
            fx.on_click(&PointerEvent::primary(*x, *y), ms(*at), &mut doc);
            last = last.max(*at);
        }

        // Each particle must be gone one second after its own click.
        fx.advance(ms(last + 1000), &mut doc);
        prop_assert_eq!(doc.element_count(), 0);
        prop_assert_eq!(fx.live_count(), 0);
    }

    #[test]
    fn non_primary_buttons_spawn_nothing(seed in any::<u64>(), index in 1u16..5) {
        let mut doc = Document::new();
        let mut fx = seeded(seed);
        let button = PointerButton::from_index(index).unwrap();
        fx.on_click(&PointerEvent::new(button, 1.0, 1.0, ClickTarget::Background), ms(0), &mut doc);
        prop_assert_eq!(doc.element_count(), 0);
    }
}

#[test]
fn test_clicks_are_unordered_in_time() {
    // Clicks may arrive out of order; deadlines still fire per particle.
    let mut doc = Document::new();
    let mut fx = seeded(42);
    fx.on_click(&PointerEvent::primary(0.0, 0.0), ms(500), &mut doc);
    fx.on_click(&PointerEvent::primary(0.0, 0.0), ms(100), &mut doc);

    fx.advance(ms(950), &mut doc);
    let remaining: Vec<_> = fx.live().map(|p| p.created_at).collect();
    assert!(remaining.iter().all(|created| *created == ms(500)));
    fx.advance(ms(1350), &mut doc);
    assert_eq!(doc.element_count(), 0);
}

#[test]
fn test_removal_after_page_closed() {
    let mut page = Portfolio::new(Box::new(MemoryStorage::with_entry("theme", "light")))
        .with_effects(Some(seeded(3)));
    page.click(PointerEvent::primary(5.0, 5.0), ms(0));
    page.tear_down();

    page.advance(ms(2000));
    assert_eq!(page.document().element_count(), 0);
    assert_eq!(page.effects().map(|fx| fx.live_count()), Some(0));
}

#[test]
fn test_particle_style_after_fade() {
    let mut doc = Document::new();
    let mut fx = seeded(8);
    let ids = fx.spawn(300.0, 200.0, ms(0), &mut doc);

    let before = doc.element(ids[0]).unwrap().style.to_css();
    assert!(before.contains("opacity: 1"));

    fx.advance(ms(50), &mut doc);
    let after = doc.element(ids[0]).unwrap().style.to_css();
    assert!(after.contains("opacity: 0"));
    assert!(after.contains("scale(2)"));
    assert!(after.contains("transition: all 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94)"));
}

#[test]
fn test_disabled_effect_is_not_installed() {
    let doc = Document::new();
    let settings = EffectSettings {
        enabled: false,
        ..EffectSettings::default()
    };
    assert!(EffectEmitter::install(Some(&doc), settings).is_none());
    assert!(EffectEmitter::install(None, EffectSettings::default()).is_none());
}
