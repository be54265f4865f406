use ipa::image::{BorderMode, ChannelLayout, Image, ImageError, ImageSize};
use ipa::imgproc::{crop, enhance, filter, flip, histogram};

fn sample_image(layout: ChannelLayout, border: BorderMode) -> Result<Image, ImageError> {
    let size = ImageSize {
        width: 5,
        height: 3,
    };
    let n = size.width * size.height * layout.num_channels();
    let data = (0..n as i32).map(|v| (v * 37) % 256).collect();
    Ok(Image::new(size, layout, data)?.with_border_mode(border))
}

fn all_samples() -> Result<Vec<Image>, ImageError> {
    let mut images = Vec::new();
    for layout in [
        ChannelLayout::Gray,
        ChannelLayout::GrayAlpha,
        ChannelLayout::Rgb,
        ChannelLayout::Rgba,
    ] {
        for border in [BorderMode::Zero, BorderMode::Circular, BorderMode::Reflected] {
            images.push(sample_image(layout, border)?);
        }
    }
    Ok(images)
}

fn ramp_4x4() -> Result<Image, ImageError> {
    Image::new(
        ImageSize {
            width: 4,
            height: 4,
        },
        ChannelLayout::Gray,
        (0..16).collect(),
    )
}

#[test]
fn flips_are_involutions() -> Result<(), ImageError> {
    for image in all_samples()? {
        let twice = flip::horizontal_flip(&flip::horizontal_flip(&image)?)?;
        assert_eq!(twice, image);
        let twice = flip::vertical_flip(&flip::vertical_flip(&image)?)?;
        assert_eq!(twice, image);
    }
    Ok(())
}

#[test]
fn circular_border_is_periodic() -> Result<(), ImageError> {
    let image = sample_image(ChannelLayout::Rgb, BorderMode::Circular)?;
    let (w, h) = (image.width() as isize, image.height() as isize);
    for y in -h..2 * h {
        for x in -w..w {
            assert_eq!(image.get_pixel(x + w, y), image.get_pixel(x, y));
        }
    }

    let ramp = ramp_4x4()?.with_border_mode(BorderMode::Circular);
    assert_eq!(ramp.get_pixel(-1, 0), ramp.get_pixel(3, 0));
    Ok(())
}

#[test]
fn reflected_border_mirrors_edges() -> Result<(), ImageError> {
    let image = sample_image(ChannelLayout::GrayAlpha, BorderMode::Reflected)?;
    let w = image.width() as isize;
    for y in 0..image.height() as isize {
        assert_eq!(image.get_pixel(-1, y), image.get_pixel(0, y));
        assert_eq!(image.get_pixel(w, y), image.get_pixel(w - 1, y));
    }
    Ok(())
}

#[test]
fn identity_kernel_and_unit_median() -> Result<(), ImageError> {
    let kernel = filter::Kernel::identity();
    for image in all_samples()? {
        let filtered = filter::filter2d_with_anchor(&image, &kernel, filter::Anchor::Centered)?;
        assert_eq!(filtered, image);

        let filtered = filter::rank_filter(
            &image,
            (1, 1),
            filter::RankOp::Median,
            filter::Anchor::Centered,
        )?;
        assert_eq!(filtered, image);
    }
    Ok(())
}

#[test]
fn histogram_counts_every_pixel() -> Result<(), ImageError> {
    for image in all_samples()? {
        let hist = histogram::compute_histogram(&image);
        assert_eq!(hist.num_channels(), image.num_channels());
        for ch in 0..hist.num_channels() {
            assert_eq!(hist.total(ch), image.width() * image.height());
        }
    }
    Ok(())
}

#[test]
fn point_mapping_identities() -> Result<(), ImageError> {
    for image in all_samples()? {
        assert_eq!(enhance::linear_mapping(&image, 1.0, 0.0)?, image);
        assert_eq!(enhance::power_mapping(&image, 1.0, 1.0)?, image);
        assert_eq!(enhance::negative(&enhance::negative(&image)?)?, image);
    }

    let image = Image::new([2, 1].into(), ChannelLayout::Gray, vec![0, 255])?;
    assert_eq!(enhance::negative(&image)?.as_slice(), &[255, 0]);
    Ok(())
}

#[test]
fn crop_center_of_ramp() -> Result<(), ImageError> {
    let cropped = crop::crop_image(&ramp_4x4()?, 1, 1, 3, 3)?;
    assert_eq!(
        cropped.size(),
        ImageSize {
            width: 2,
            height: 2
        }
    );
    assert_eq!(cropped.as_slice(), &[5, 6, 9, 10]);
    Ok(())
}

#[test]
fn equalize_constant_image_stays_constant() -> Result<(), ImageError> {
    for v in [0, 17, 255] {
        let mut image = Image::from_size_val([6, 4].into(), ChannelLayout::Rgb, v)?;
        histogram::equalize_histogram(&mut image)?;
        let first = image.as_slice()[0];
        assert!(image.as_slice().iter().all(|&s| s == first));
    }
    Ok(())
}
