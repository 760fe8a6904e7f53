use super::*;

fn image_from_rows(rows: &[&[u8]]) -> RgbaImage {
    let h = rows.len() as u32;
    let w = rows[0].len() as u32;
    RgbaImage::from_fn(w, h, |x, y| {
        let v = rows[y as usize][x as usize];
        Rgba([v, v, v, 255])
    })
}

#[test]
fn nearest_color_thresholds_at_midpoint() {
    let img = image_from_rows(&[&[0, 100, 127], &[128, 200, 255]]);
    let q = NearestColor::default().quantize(&img);
    assert_eq!(q.indices, vec![0, 0, 0, 1, 1, 1]);
    assert_eq!(q.canvas, Canvas { width: 3, height: 2 });
}

#[test]
fn index_lookup_is_row_major() {
    let img = image_from_rows(&[&[0, 255], &[255, 0]]);
    let q = NearestColor::default().quantize(&img);
    assert_eq!(q.index_at(1, 0), Some(1));
    assert_eq!(q.index_at(0, 1), Some(1));
    assert_eq!(q.index_at(1, 1), Some(0));
    assert_eq!(q.index_at(2, 0), None);
}

#[test]
fn distinct_indices_and_expansion() {
    let img = image_from_rows(&[&[10, 240, 20]]);
    let q = NearestColor::default().quantize(&img);
    assert_eq!(q.distinct_indices(), vec![0, 1]);

    let rgba = q.to_rgba(&Palette::black_and_white());
    assert_eq!(*rgba.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(*rgba.get_pixel(1, 0), Rgba([255, 255, 255, 255]));
}

#[test]
fn works_through_trait_object() {
    let q: Box<dyn Quantizer> = Box::new(NearestColor::new(Palette::black_and_white()));
    assert_eq!(q.palette().len(), 2);
    let out = q.quantize(&image_from_rows(&[&[255]]));
    assert_eq!(out.indices, vec![1]);
}
