use label_gen::labelsize;
use label_gen::{layout, CanvasSpec, FontStore, Info, LabelContent, LabelPdf, Style};

fn main() {
    env_logger::init();

    // a small kitchen storage label on 2.25" x 1.25" address stock
    let canvas: CanvasSpec = labelsize::ADDRESS.into();

    let content = LabelContent::new(
        "Kitchen Items",
        vec![
            "Plates".to_string(),
            "Bowls".to_string(),
            "Mugs".to_string(),
            "Cutlery tray".to_string(),
            "Dish towels".to_string(),
            "Measuring cups".to_string(),
        ],
    );

    let style = Style::default();
    let fonts = FontStore::new();
    let primitives = layout(&canvas, &content, &style, &fonts).expect("canvas is valid");

    let mut info = Info::new();
    info.title("Kitchen Items").author("label-gen demo");

    let mut out = std::fs::File::create("kitchen-label.pdf").unwrap();
    LabelPdf {
        canvas,
        style,
        primitives: &primitives,
        image: None,
        info: Some(info),
    }
    .write(&mut out)
    .unwrap();
}
