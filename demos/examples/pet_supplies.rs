// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive an icicle session over a small pet-supplies category table.
//!
//! This example shows how to combine:
//! - `icicle_tree` to load records from JSON and build the tree,
//! - `icicle_focus` to handle clicks and searches,
//! - a text [`Canvas`] standing in for a real drawing layer.
//!
//! Run:
//! - `cargo run -p icicle_demos --example pet_supplies`

use icicle_demos::PET_SUPPLIES;
use icicle_focus::{Canvas, Frame, IcicleConfig, Session};
use icicle_tree::JsonRecords;

/// Prints the breadcrumb and every on-canvas, visible label.
#[derive(Debug)]
struct TextCanvas {
    breadth: f64,
}

impl Canvas for TextCanvas {
    fn render(&mut self, frame: &Frame<'_>) {
        println!(
            "== {} ({} ms)",
            frame.breadcrumb_text(),
            frame.duration.as_millis()
        );
        for item in &frame.items {
            let r = item.rect.0;
            let on_canvas = r.y0 >= 0.0 && r.x0 >= 0.0 && r.x1 <= self.breadth;
            if !on_canvas || !item.label_opacity.is_visible() {
                continue;
            }
            let screen = item.rect.screen_rect();
            println!(
                "  {:<22} {} at ({:>6.1}, {:>6.1}) {:>5.1}x{:<5.1} {} subcategories, {} products",
                item.label,
                item.fill,
                screen.x0,
                screen.y0,
                screen.width(),
                screen.height(),
                item.summary.subcategories,
                item.summary.products.unwrap_or(0),
            );
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let config = IcicleConfig::default();
    let canvas = TextCanvas {
        breadth: config.extent.breadth,
    };
    let mut session = match Session::load(&mut JsonRecords::new(PET_SUPPLIES), config, canvas) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("cannot start: {err}");
            return;
        }
    };

    // Zoom into Dogs, then into Dog Food, then back out twice.
    let dogs = session.tree().find("1").expect("dataset has Dogs");
    let food = session.tree().find("4").expect("dataset has Dog Food");
    session.click(dogs);
    session.click(food);
    session.click(food);
    session.click(dogs);

    // "food" matches Dog Food, then Cat Food, then nothing.
    while session.search("food").is_some() {}
}
