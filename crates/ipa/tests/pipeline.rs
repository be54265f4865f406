use ipa::image::{BorderMode, ChannelLayout, Image, ImageSize};
use ipa::imgproc::{filter, histogram, interpolation::InterpolationMode, resize};
use ipa::io::functional as F;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn blur_resize_and_save() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("checker.png");

    let size = ImageSize {
        width: 8,
        height: 6,
    };
    let data = (0..size.width * size.height)
        .flat_map(|i| {
            let (x, y) = (i % size.width, i / size.width);
            let v = if (x / 2 + y / 2) % 2 == 0 { 200 } else { 40 };
            [v, v / 2, 255 - v]
        })
        .collect();
    let image =
        Image::new(size, ChannelLayout::Rgb, data)?.with_border_mode(BorderMode::Reflected);

    let kernel = filter::kernels::gaussian_kernel(3, 1.0)?;
    let blurred = filter::filter2d_with_anchor(&image, &kernel, filter::Anchor::Centered)?;
    let small = resize::resize(&blurred, 0.5, 0.5, InterpolationMode::Bilinear)?;
    assert_eq!(
        small.size(),
        ImageSize {
            width: 4,
            height: 3
        }
    );
    assert_eq!(small.border_mode(), BorderMode::Reflected);

    F::write_image_any(&file_path, &small)?;
    let mut decoded = F::read_image_any(&file_path)?;
    assert_eq!(decoded.as_slice(), small.as_slice());
    assert_eq!(decoded.border_mode(), BorderMode::Zero);

    histogram::equalize_histogram(&mut decoded)?;
    assert!(decoded.as_slice().iter().all(|&v| (0..=255).contains(&v)));

    Ok(())
}
