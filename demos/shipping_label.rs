use label_gen::labelsize;
use label_gen::{
    layout, CanvasSpec, FontFamily, FontStore, Info, LabelContent, LabelPdf, RasterImage, Style,
    TextAlign,
};

/// Render a placeholder photo in memory so the demo has no asset files.
fn placeholder_photo() -> RasterImage {
    let mut png: Vec<u8> = Vec::new();
    let image = image::RgbImage::from_fn(320, 240, |x, y| {
        let checker = ((x / 40) + (y / 40)) % 2 == 0;
        if checker {
            image::Rgb([40, 40, 48])
        } else {
            image::Rgb([220, 220, 228])
        }
    });
    image::DynamicImage::ImageRgb8(image)
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageOutputFormat::Png,
        )
        .unwrap();
    RasterImage::probe(png).expect("generated png probes fine")
}

fn main() {
    env_logger::init();

    // a 4" x 6" shipping label with a content photo at the bottom
    let canvas: CanvasSpec = labelsize::SHIPPING.into();

    let photo = placeholder_photo();
    let content = LabelContent::new(
        "Box 12 of 14 / Garage",
        vec![
            "Power drill and bits".to_string(),
            "Extension cords (3)".to_string(),
            "Socket wrench set".to_string(),
            "Paint rollers".to_string(),
            "Drop cloths".to_string(),
            "Work gloves".to_string(),
            "Safety glasses".to_string(),
            "Stud finder".to_string(),
        ],
    )
    .with_image(Some(photo));

    let style = Style::new(FontFamily::Serif, TextAlign::Center);
    let fonts = FontStore::new();
    let primitives = layout(&canvas, &content, &style, &fonts).expect("canvas is valid");

    let mut info = Info::new();
    info.title("Box 12 of 14").author("label-gen demo");

    let mut out = std::fs::File::create("shipping-label.pdf").unwrap();
    LabelPdf {
        canvas,
        style,
        primitives: &primitives,
        image: content.image.as_ref(),
        info: Some(info),
    }
    .write(&mut out)
    .unwrap();
}
