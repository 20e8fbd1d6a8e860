use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use smudge_image::{Plane, PlanarRgb};
use smudge_imgproc::filter::{box_blur, BlurConfig};
use smudge_imgproc::pipeline::blur_planar;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Box Blur");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3, 5, 7, 9].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);
            let image_size = [*width, *height].into();
            let config = BlurConfig::new(*kernel_size);

            let plane = Plane::from_size_val(image_size, 128);
            let plane_out = Plane::from_size_val(image_size, 0);

            group.bench_with_input(
                BenchmarkId::new("box_blur_plane", &parameter_string),
                &(&plane, &plane_out),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(box_blur(src, &mut dst, &config)))
                },
            );

            let image = PlanarRgb::from_size_val(image_size, 128);
            let image_out = PlanarRgb::from_size_val(image_size, 0);

            group.bench_with_input(
                BenchmarkId::new("blur_planar_rgb", &parameter_string),
                &(&image, &image_out),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(blur_planar(src, &mut dst, &config)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
