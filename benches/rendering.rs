//! Benchmarks for the per-frame preview refresh and draw path.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mdpane::app::{Message, Model, update};
use mdpane::ui::render;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn bench_refresh_after_keystroke(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md");
    c.bench_function("refresh_after_keystroke", |b| {
        let mut model = Model::new(None, md, (120, 40));
        b.iter(|| {
            model = update(std::mem::take(&mut model), Message::InsertChar(black_box('x')));
            model.refresh_preview();
        });
    });
}

fn bench_draw_frame(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md");
    c.bench_function("draw_frame", |b| {
        let mut model = Model::new(None, md, (120, 40));
        model.refresh_preview();
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        b.iter(|| {
            terminal.draw(|frame| render(&mut model, frame)).unwrap();
        });
    });
}

criterion_group!(benches, bench_refresh_after_keystroke, bench_draw_frame);
criterion_main!(benches);
