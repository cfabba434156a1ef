use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strfchr::{load_from_str, FormatInterpreter, RenderOptions, StandardMapper};

fn sample_document(count: u32) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<charlist>\n");
    for cp in 0x100..0x100 + count {
        xml.push_str(&format!(
            "  <character id=\"U{:05X}\" dec=\"{}\" mode=\"text\" type=\"alphabetic\">\n",
            cp, cp
        ));
        xml.push_str(&format!("    <latex>\\char{}</latex>\n", cp));
        xml.push_str(&format!("    <entity id=\"c{:x}\" set=\"8879-isolat2\"/>\n", cp));
        xml.push_str(&format!("    <font name=\"cmr10\" pos=\"{}\"/>\n", cp % 256));
        xml.push_str("    <description unicode=\"1.1\">SOME CHARACTER</description>\n");
        xml.push_str("  </character>\n");
    }
    xml.push_str("</charlist>\n");
    xml
}

fn benchmark_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for count in [100u32, 1000] {
        let xml = sample_document(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &xml, |b, xml| {
            b.iter(|| load_from_str(black_box(xml)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_render_computed(c: &mut Criterion) {
    let loaded = load_from_str(&sample_document(10)).unwrap();
    let interpreter = FormatInterpreter::new(&loaded.registry, RenderOptions::new());
    let template = interpreter.compile("%8 %4 %2 %0 %+ %F").unwrap();

    c.bench_function("render_computed", |b| {
        b.iter(|| {
            for cp in 0x100..0x200 {
                black_box(interpreter.render_compiled(&template, black_box(cp)).unwrap());
            }
        })
    });
}

fn benchmark_render_library(c: &mut Criterion) {
    let loaded = load_from_str(&sample_document(10)).unwrap();
    let interpreter = FormatInterpreter::new(&loaded.registry, RenderOptions::new());
    let template = interpreter.compile("%U %B %G %S %C").unwrap();

    c.bench_function("render_library", |b| {
        b.iter(|| {
            for cp in 0x100..0x200 {
                black_box(interpreter.render_compiled(&template, black_box(cp)).unwrap());
            }
        })
    });
}

fn benchmark_render_lookup(c: &mut Criterion) {
    let loaded = load_from_str(&sample_document(1000)).unwrap();
    let interpreter = FormatInterpreter::new(
        &loaded.registry,
        RenderOptions::new().with_entity_set("isolat2"),
    );
    let template = interpreter.compile("%{latex} %N %{font}").unwrap();

    c.bench_function("render_lookup", |b| {
        b.iter(|| {
            for cp in 0x100..0x500 {
                black_box(interpreter.render_compiled(&template, black_box(cp)).unwrap());
            }
        })
    });
}

fn benchmark_build_map(c: &mut Criterion) {
    let loaded = load_from_str(&sample_document(1000)).unwrap();
    let mapper = StandardMapper::new(&loaded.registry);

    c.bench_function("build_map", |b| {
        b.iter(|| black_box(mapper.build_map("latex", "entity.isolat2")))
    });
}

criterion_group!(
    benches,
    benchmark_load,
    benchmark_render_computed,
    benchmark_render_library,
    benchmark_render_lookup,
    benchmark_build_map
);
criterion_main!(benches);
