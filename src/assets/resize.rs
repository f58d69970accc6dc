use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{
    DynamicImage, GrayAlphaImage, GrayImage, ImageBuffer, Luma, LumaA, Rgb, RgbImage, Rgba,
    RgbaImage,
};

use crate::error::{AssetError, Result};

/// Resize an image to exact dimensions using Lanczos3
///
/// The aspect ratio is not preserved: the source is stretched or squashed to
/// fill the target. The color mode of the source is kept (gray, gray+alpha,
/// RGB or RGBA) along with its 8-bit or 16-bit sample depth.
pub fn resize_exact(img: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(AssetError::resize(width, height, "target dimensions must be non-zero"));
    }

    let (src_width, src_height) = (img.width(), img.height());
    if src_width == 0 || src_height == 0 {
        return Err(AssetError::resize(width, height, "source image is empty"));
    }

    let (pixel_type, src_pixels) = to_packed_pixels(img);

    if src_width == width && src_height == height {
        return from_packed_pixels(pixel_type, width, height, src_pixels);
    }

    let src_image = Image::from_vec_u8(src_width, src_height, src_pixels, pixel_type)
        .map_err(|e| AssetError::resize(width, height, e))?;

    let mut dst_image = Image::new(width, height, pixel_type);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));

    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| AssetError::resize(width, height, e))?;

    from_packed_pixels(pixel_type, width, height, dst_image.buffer().to_vec())
}

/// Flatten a decoded image into a byte layout the resizer handles
///
/// 8-bit and 16-bit sources keep their depth. Float sources become 16-bit,
/// which is the deepest sample format PNG can hold.
fn to_packed_pixels(img: &DynamicImage) -> (PixelType, Vec<u8>) {
    match img {
        DynamicImage::ImageLuma8(buf) => (PixelType::U8, buf.as_raw().clone()),
        DynamicImage::ImageLumaA8(buf) => (PixelType::U8x2, buf.as_raw().clone()),
        DynamicImage::ImageRgb8(buf) => (PixelType::U8x3, buf.as_raw().clone()),
        DynamicImage::ImageRgba8(buf) => (PixelType::U8x4, buf.as_raw().clone()),
        DynamicImage::ImageLuma16(buf) => (PixelType::U16, u16_to_bytes(buf.as_raw())),
        DynamicImage::ImageLumaA16(buf) => (PixelType::U16x2, u16_to_bytes(buf.as_raw())),
        DynamicImage::ImageRgb16(buf) => (PixelType::U16x3, u16_to_bytes(buf.as_raw())),
        DynamicImage::ImageRgba16(buf) => (PixelType::U16x4, u16_to_bytes(buf.as_raw())),
        DynamicImage::ImageRgb32F(_) => (PixelType::U16x3, u16_to_bytes(img.to_rgb16().as_raw())),
        DynamicImage::ImageRgba32F(_) => {
            (PixelType::U16x4, u16_to_bytes(img.to_rgba16().as_raw()))
        }
        other if other.color().has_alpha() => (PixelType::U8x4, other.to_rgba8().into_raw()),
        other => (PixelType::U8x3, other.to_rgb8().into_raw()),
    }
}

fn u16_to_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
        .collect()
}

fn from_packed_pixels(
    pixel_type: PixelType,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<DynamicImage> {
    let image = match pixel_type {
        PixelType::U8 => GrayImage::from_raw(width, height, pixels).map(DynamicImage::ImageLuma8),
        PixelType::U8x2 => {
            GrayAlphaImage::from_raw(width, height, pixels).map(DynamicImage::ImageLumaA8)
        }
        PixelType::U8x3 => RgbImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8),
        PixelType::U8x4 => {
            RgbaImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgba8)
        }
        PixelType::U16 => ImageBuffer::<Luma<u16>, _>::from_raw(width, height, bytes_to_u16(&pixels))
            .map(DynamicImage::ImageLuma16),
        PixelType::U16x2 => {
            ImageBuffer::<LumaA<u16>, _>::from_raw(width, height, bytes_to_u16(&pixels))
                .map(DynamicImage::ImageLumaA16)
        }
        PixelType::U16x3 => ImageBuffer::<Rgb<u16>, _>::from_raw(width, height, bytes_to_u16(&pixels))
            .map(DynamicImage::ImageRgb16),
        PixelType::U16x4 => {
            ImageBuffer::<Rgba<u16>, _>::from_raw(width, height, bytes_to_u16(&pixels))
                .map(DynamicImage::ImageRgba16)
        }
        other => {
            return Err(AssetError::resize(
                width,
                height,
                format!("unsupported pixel type {:?}", other),
            ))
        }
    };

    image.ok_or_else(|| AssetError::resize(width, height, "pixel buffer does not match dimensions"))
}
