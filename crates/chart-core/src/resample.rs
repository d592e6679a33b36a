// File: crates/chart-core/src/resample.rs
// Summary: Post-processing of rendered PNGs: tight crop, exact Lanczos resize, flatten to opaque RGB.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::Result;
use crate::geometry::RectI32;

/// Pixels kept around the content box when cropping.
pub const TIGHT_PAD_PX: i32 = 4;

/// Bounding box of pixels that differ from `background`, or `None` when the image is blank.
pub fn content_bounds(img: &RgbaImage, background: Rgba<u8>) -> Option<RectI32> {
    let (mut l, mut t, mut r, mut b) = (u32::MAX, u32::MAX, 0u32, 0u32);
    let mut any = false;
    for (x, y, p) in img.enumerate_pixels() {
        if *p != background {
            any = true;
            l = l.min(x);
            t = t.min(y);
            r = r.max(x);
            b = b.max(y);
        }
    }
    any.then(|| RectI32::from_ltrb(l as i32, t as i32, r as i32 + 1, b as i32 + 1))
}

/// Crop uniform `background` margins down to the content box grown by `pad`.
/// Blank images are returned unchanged.
pub fn tight_crop(img: &RgbaImage, background: Rgba<u8>, pad: i32) -> RgbaImage {
    let Some(bounds) = content_bounds(img, background) else {
        return img.clone();
    };
    let r = bounds.expand_clamped(pad, img.width() as i32, img.height() as i32);
    image::imageops::crop_imm(img, r.left as u32, r.top as u32, r.width() as u32, r.height() as u32).to_image()
}

/// Tight-crop `img` on white, resize to exactly `width` x `height` with Lanczos3,
/// and flatten onto white.
pub fn fit_exact(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let white = Rgba([255, 255, 255, 255]);
    let cropped = tight_crop(&img.to_rgba8(), white, TIGHT_PAD_PX);
    let resized = DynamicImage::ImageRgba8(cropped).resize_exact(width, height, FilterType::Lanczos3);
    DynamicImage::ImageRgb8(flatten_on_white(&resized.to_rgba8()))
}

/// Reload the PNG at `path`, fit it to `width` x `height`, and overwrite it in place.
/// Returns the size the file had before resampling.
pub fn resample_png_in_place(path: impl AsRef<Path>, width: u32, height: u32) -> Result<(u32, u32)> {
    let path = path.as_ref();
    let img = image::open(path)?;
    let before = (img.width(), img.height());
    let out = fit_exact(&img, width, height);
    out.save_with_format(path, ImageFormat::Png)?;
    log::info!(
        "resampled {} from {}x{} to {}x{} (lanczos3)",
        path.display(),
        before.0,
        before.1,
        width,
        height
    );
    Ok(before)
}

fn flatten_on_white(img: &RgbaImage) -> image::RgbImage {
    image::RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        let a = a as u16;
        let blend = |c: u8| ((c as u16 * a + 255 * (255 - a) + 127) / 255) as u8;
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn framed(w: u32, h: u32, rect: (u32, u32, u32, u32)) -> RgbaImage {
        let (l, t, r, b) = rect;
        RgbaImage::from_fn(w, h, |x, y| {
            if x >= l && x < r && y >= t && y < b { Rgba([20, 40, 200, 255]) } else { WHITE }
        })
    }

    #[test]
    fn bounds_of_single_block() {
        let img = framed(50, 40, (10, 5, 30, 25));
        assert_eq!(content_bounds(&img, WHITE), Some(RectI32::from_ltrb(10, 5, 30, 25)));
    }

    #[test]
    fn blank_has_no_bounds_and_is_not_cropped() {
        let img = RgbaImage::from_pixel(16, 16, WHITE);
        assert_eq!(content_bounds(&img, WHITE), None);
        assert_eq!(tight_crop(&img, WHITE, 2).dimensions(), (16, 16));
    }

    #[test]
    fn crop_removes_border_keeps_content() {
        let img = framed(50, 40, (10, 5, 30, 25));
        let out = tight_crop(&img, WHITE, 2);
        assert_eq!(out.dimensions(), (24, 24));
        assert_eq!(*out.get_pixel(12, 12), Rgba([20, 40, 200, 255]));
        assert_eq!(*out.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn fit_exact_hits_target_with_white_corners() {
        let img = DynamicImage::ImageRgba8(framed(300, 280, (40, 30, 260, 250)));
        let out = fit_exact(&img, 512, 512);
        assert_eq!((out.width(), out.height()), (512, 512));
        let rgb = out.to_rgb8();
        assert_eq!(*rgb.get_pixel(0, 0), image::Rgb([255, 255, 255]));
        assert_eq!(*rgb.get_pixel(511, 511), image::Rgb([255, 255, 255]));
    }

    #[test]
    fn flatten_blends_transparent_to_white() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        assert_eq!(*flatten_on_white(&img).get_pixel(0, 0), image::Rgb([255, 255, 255]));
    }
}
