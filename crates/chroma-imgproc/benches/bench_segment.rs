use chroma_image::{Image, ImageSize};
use chroma_imgproc::segment::{segment_region, Region, SegmentConfig};
use chroma_imgproc::window::{sliding_window, WindowConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_test_image(width: usize, height: usize) -> Image<u8, 3> {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<u8> = (0..(width * height * 3)).map(|_| rng.random()).collect();
    let size = ImageSize { width, height };
    Image::new(size, data).unwrap()
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("Segment");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = create_test_image(*width, *height);
        let region = Region::new(0, width / 2, 0, height / 2);

        group.bench_with_input(
            BenchmarkId::new("sliding_window", &parameter_string),
            &image,
            |b, image| {
                let config = WindowConfig::default();
                b.iter(|| {
                    std::hint::black_box(
                        sliding_window(image, &config, region.x_range(), region.y_range())
                            .unwrap()
                            .count(),
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("segment_region", &parameter_string),
            &image,
            |b, image| {
                let config = SegmentConfig::default();
                b.iter(|| std::hint::black_box(segment_region(image, &region, &config).unwrap()))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_segment);
criterion_main!(benches);
