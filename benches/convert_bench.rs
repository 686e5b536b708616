//! Converter benchmark
//!
//! Measures conversion throughput for rewrite files of increasing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use conf2json::converter::Converter;

fn build_conf(characters: usize) -> String {
    let mut conf = String::new();
    for c in 0..characters {
        conf.push_str(&format!("#start Character {}# art\n", c));
        conf.push_str(&format!(
            "^https?://prd-game-a[0-9]?-gbf\\.akamaized\\.net/assets/img/sp/assets/npc/zoom/30400{:05}/x\\.png url 302 https://raw.githubusercontent.com/u/r/main/npc/zoom/30400{:05}/x.png\n",
            c, c
        ));
        conf.push_str(&format!(
            "#! s{}.png url 302 https://example.com/assets/summon/s{}/base/s.png\n",
            c, c
        ));
        conf.push_str("other.png url 302 https://example.com/shared/other.png\n");
    }
    conf
}

fn benchmark_convert(c: &mut Criterion) {
    let converter = Converter::default();
    let mut group = c.benchmark_group("convert_str");

    for size in [10, 100, 1000] {
        let conf = build_conf(size);
        group.bench_with_input(BenchmarkId::new("characters", size), &conf, |b, conf| {
            b.iter(|| converter.convert_str(conf))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_convert);
criterion_main!(benches);
