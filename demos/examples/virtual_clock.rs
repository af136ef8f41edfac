// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a carousel through a scripted session on a virtual clock.
//!
//! Button presses, a drag, a resize, hover and autoplay are all fed through
//! one controller; watch the cooldown drop the duplicate press and the resize
//! clamp the index.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p carousel_demos --example virtual_clock`

use carousel::{Carousel, CarouselConfig, CarouselInput, Direction, NavKey};
use carousel_demos::LoggedStrip;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut carousel = Carousel::new(LoggedStrip::new(900.0, 5), CarouselConfig::default());
    carousel.start_autoplay(0);

    let script = [
        (100, CarouselInput::Button(Direction::Next)),
        // Inside the cooldown: dropped.
        (300, CarouselInput::Button(Direction::Next)),
        (1_000, CarouselInput::Key(NavKey::ArrowRight)),
        (2_000, CarouselInput::PointerEnter),
        (2_100, CarouselInput::PointerDown { x: 600.0 }),
        (2_150, CarouselInput::PointerMove { x: 560.0 }),
        (2_200, CarouselInput::PointerMove { x: 520.0 }),
        (2_250, CarouselInput::PointerUp),
        (4_000, CarouselInput::PointerLeave),
    ];

    for (now, input) in script {
        carousel.poll(now);
        println!("t={now:>6}ms {input:?}");
        carousel.handle(input, now);
    }

    // Widen the window past the three-up breakpoint; the debounce applies it once.
    carousel.target_mut().width = 1_400.0;
    for now in [4_100, 4_150, 4_200] {
        carousel.handle(CarouselInput::Resize, now);
    }
    carousel.poll(4_450);
    println!("after resize: index {} of {}", carousel.index(), carousel.max_index());

    carousel.target_mut().scroll_page(120.0);
    for (card, translation) in carousel.target().card_translations().iter().enumerate() {
        println!("card {card}: translate({:.1}, {:.1})", translation.x, translation.y);
    }

    // Let autoplay run for a while.
    let mut now = 4_450;
    while let Some(deadline) = carousel.next_deadline() {
        if deadline > 40_000 {
            break;
        }
        now = deadline;
        carousel.poll(now);
    }
    println!("t={now:>6}ms autoplay left index at {}", carousel.index());

    carousel.shutdown();
    assert_eq!(carousel.pending_timers(), 0);
}
