use blocklevel_engine::{PaletteFilter, TierCatalog, ToolboxOptions, make_toolbox};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn generate_palette(blocks: usize) -> String {
    let mut xml = String::from("<category name=\"Motion\" id=\"motion\">\n");
    for i in 0..blocks {
        let block_type = if i % 3 == 0 { "motion_goto" } else { "motion_movesteps" };
        xml.push_str(&format!(
            "    <block type=\"{block_type}\">\n        <value name=\"STEPS\">\n            <shadow type=\"math_number\">\n                <field name=\"NUM\">{i}</field>\n            </shadow>\n        </value>\n    </block>\n"
        ));
        if i % 4 == 3 {
            xml.push_str("    <sep gap=\"36\"/>\n");
        }
    }
    xml.push_str("</category>");
    xml
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette_filter");
    group.sample_size(20);
    let filter = PaletteFilter::new(TierCatalog::builtin());

    for size in [10, 100, 1000] {
        let palette = generate_palette(size);
        group.bench_with_input(BenchmarkId::new("explorer", size), &palette, |b, palette| {
            b.iter(|| {
                let out = filter.filter(std::hint::black_box(palette), "motion", Some("explorer"));
                std::hint::black_box(out);
            });
        });
    }

    group.finish();
}

fn bench_toolbox(c: &mut Criterion) {
    let filter = PaletteFilter::new(TierCatalog::builtin());
    let options = ToolboxOptions {
        is_stage: false,
        target_id: "sprite1".into(),
        level: Some("creator".into()),
        ..ToolboxOptions::default()
    };

    c.bench_function("make_toolbox_creator", |b| {
        b.iter(|| {
            let doc = make_toolbox(std::hint::black_box(&options), &[], &filter);
            std::hint::black_box(doc);
        });
    });
}

criterion_group!(benches, bench_filter, bench_toolbox);
criterion_main!(benches);
