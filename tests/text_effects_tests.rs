// Host-side tests for the count-up and text scramble effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod studio {
    pub mod attrs {
        include!("../src/core/attrs.rs");
    }
    pub mod count_up {
        include!("../src/core/count_up.rs");
    }
    pub mod scramble {
        include!("../src/core/scramble.rs");
    }
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use studio::count_up::*;
use studio::scramble::*;

fn counter(end: f64, duration_ms: f64, decimals: usize) -> CountUp {
    CountUp::new(CountUpOptions {
        end,
        duration_ms,
        decimals,
        ..CountUpOptions::default()
    })
}

#[test]
fn ease_out_expo_endpoints() {
    assert_eq!(ease_out_expo(0.0), 0.0);
    assert_eq!(ease_out_expo(1.0), 1.0);
    assert!(ease_out_expo(0.5) > 0.9);
}

#[test]
fn count_up_waits_for_start() {
    let mut c = counter(100.0, 1000.0, 0);
    assert!(!c.tick(0.0));
    assert_eq!(c.formatted(), "0");
    assert!(c.start());
    assert!(!c.start());
}

#[test]
fn count_up_lands_exactly_on_end() {
    let mut c = counter(100.0, 2000.0, 0);
    c.start();
    assert!(c.tick(1000.0));
    assert!(c.tick(1500.0));
    assert!(!c.tick(3000.0));
    assert!(c.is_finished());
    assert_eq!(c.formatted(), "100");
}

#[test]
fn zero_duration_finishes_on_first_frame() {
    let mut c = counter(100.0, 0.0, 0);
    c.start();
    assert!(!c.tick(5.0));
    assert_eq!(c.value(), 100.0);
    assert_eq!(c.formatted(), "100");
}

#[test]
fn long_duration_formats_end_once_complete() {
    let mut c = counter(100.0, 3_600_000.0, 0);
    c.start();
    assert!(c.tick(0.0));
    assert!(c.tick(1_800_000.0));
    assert_ne!(c.formatted(), "100");
    assert!(!c.tick(3_600_000.0));
    assert_eq!(c.formatted(), "100");
}

#[test]
fn count_up_never_goes_backwards() {
    let mut c = counter(500.0, 1000.0, 0);
    c.start();
    c.tick(0.0);
    c.tick(600.0);
    let high = c.value();
    c.tick(300.0);
    assert_eq!(c.value(), high);

    let mut prev = high;
    for t in (600..=1000).step_by(50) {
        c.tick(t as f64);
        assert!(c.value() >= prev);
        prev = c.value();
    }
    assert_eq!(c.value(), 500.0);
}

#[test]
fn count_up_formats_prefix_suffix_and_decimals() {
    assert_eq!(format_count(1234.5, 1, "$", "+"), "$1234.5+");
    assert_eq!(format_count(99.0, 2, "", "%"), "99.00%");

    let opts = CountUpOptions::from_attrs(|name| match name {
        "data-count-up" => Some("250".to_string()),
        "data-decimals" => Some("2".to_string()),
        "data-suffix" => Some("k".to_string()),
        "data-start-on-view" => Some("false".to_string()),
        _ => None,
    });
    assert_eq!(opts.end, 250.0);
    assert_eq!(opts.decimals, 2);
    assert!(!opts.start_on_view);
    assert_eq!(opts.duration_ms, 2000.0);
    assert_eq!(CountUp::new(opts).formatted(), "0.00k");
}

#[test]
fn scramble_keeps_spaces_and_uses_alphabet() {
    let target: Vec<char> = "AB CD".chars().collect();
    let mut rng = StdRng::seed_from_u64(7);
    for step in 0..SCRAMBLE_STEPS {
        let frame: Vec<char> = scramble_frame(&target, step, &mut rng).chars().collect();
        assert_eq!(frame.len(), target.len());
        assert_eq!(frame[2], ' ');
        let revealed = revealed_count(step, target.len());
        for (i, c) in frame.iter().enumerate() {
            if i < revealed {
                assert_eq!(*c, target[i]);
            } else if *c != ' ' {
                assert!(SCRAMBLE_ALPHABET.contains(&(*c as u8)));
            }
        }
    }
    assert_eq!(scramble_frame(&target, SCRAMBLE_STEPS, &mut rng), "AB CD");
}

#[test]
fn revealed_prefix_grows_with_step() {
    assert_eq!(revealed_count(0, 5), 0);
    assert_eq!(revealed_count(10, 5), 2);
    assert_eq!(revealed_count(20, 5), 5);
    assert_eq!(revealed_count(99, 5), 5);
}

#[test]
fn scrambler_settles_after_twenty_steps() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut s = Scrambler::new("HELLO WORLD");
    assert_eq!(s.display_text(), "HELLO WORLD");
    assert!(!s.advance(&mut rng));

    s.restart();
    assert!(s.is_scrambling());
    for _ in 0..SCRAMBLE_STEPS - 1 {
        assert!(s.advance(&mut rng));
    }
    assert!(!s.advance(&mut rng));
    assert!(!s.is_scrambling());
    assert_eq!(s.display_text(), "HELLO WORLD");
}

#[test]
fn restart_mid_run_resets_the_step_counter() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = Scrambler::new("HELLO WORLD");
    s.restart();
    for _ in 0..10 {
        assert!(s.advance(&mut rng));
    }
    assert!(s.is_scrambling());

    s.restart();
    assert!(s.is_scrambling());
    // first step after the restart reveals nothing yet
    assert!(s.advance(&mut rng));
    assert_eq!(revealed_count(1, 11), 0);
    assert_eq!(s.display_text().chars().nth(5), Some(' '));
    // a full run from step 0 remains: 18 more in progress, then settled
    for _ in 0..SCRAMBLE_STEPS - 2 {
        assert!(s.advance(&mut rng));
    }
    assert!(!s.advance(&mut rng));
    assert_eq!(s.display_text(), "HELLO WORLD");
}

#[test]
fn scramble_interval_is_never_zero() {
    assert_eq!(ScrambleOptions::default().step_interval_ms(), 75);
    let instant = ScrambleOptions {
        duration_ms: 0.0,
        ..ScrambleOptions::default()
    };
    assert_eq!(instant.step_interval_ms(), 1);
}
