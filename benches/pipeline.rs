//! Benchmarks for the wsz pipeline.

use std::io::{Cursor, Write};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use image::{ImageFormat, Rgba, RgbaImage};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use wsz::{catalog, decode_sheet, extract_all, load, read_archive, Sheet, SheetSet};

/// Smallest dimensions covering every cataloged rect of a sheet.
fn sheet_dimensions(sheet: Sheet) -> (u32, u32) {
    let mut w = 91;
    let mut h = 103;
    for &id in catalog().sprites_for(sheet) {
        let (_, rect) = catalog().lookup(id).unwrap();
        w = w.max(rect.x + rect.w);
        h = h.max(rect.y + rect.h);
    }
    (w, h)
}

fn solid_bmp(w: u32, h: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(w, h, Rgba([rgb[0], rgb[1], rgb[2], 255]));
    let mut bytes = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .to_rgb8()
        .write_to(&mut bytes, ImageFormat::Bmp)
        .unwrap();
    bytes.into_inner()
}

fn full_source(rgb: [u8; 3]) -> SheetSet {
    let mut set = SheetSet::new();
    for sheet in Sheet::ALL {
        let (w, h) = sheet_dimensions(sheet);
        set.insert_sheet(sheet, solid_bmp(w, h, rgb));
    }
    set
}

fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

// -- Decoding and extraction benchmarks --

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let (w, h) = sheet_dimensions(Sheet::Titlebar);
    let titlebar_bytes = solid_bmp(w, h, [40, 40, 40]);

    group.bench_function("decode_sheet", |b| {
        b.iter(|| decode_sheet(black_box(&titlebar_bytes)).unwrap())
    });

    let titlebar = decode_sheet(&titlebar_bytes).unwrap();
    group.bench_function("extract_titlebar", |b| {
        b.iter(|| extract_all(black_box(&titlebar), Sheet::Titlebar))
    });

    group.finish();
}

// -- Archive benchmarks --

fn bench_archive(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive");

    let main = {
        let (w, h) = sheet_dimensions(Sheet::Main);
        solid_bmp(w, h, [40, 40, 40])
    };
    let eq = {
        let (w, h) = sheet_dimensions(Sheet::EqMain);
        solid_bmp(w, h, [40, 40, 40])
    };
    let zip = build_zip(&[
        ("main.bmp", &main),
        ("eqmain.bmp", &eq),
        ("pledit.txt", b"[Text]\nNormal=#00FF00\nFont=Arial\n"),
    ]);

    group.bench_function("read_archive", |b| {
        b.iter(|| read_archive(black_box(&zip)).unwrap())
    });

    group.finish();
}

// -- Composition benchmarks --

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    group.sample_size(20);

    let full = full_source([40, 40, 40]);
    let reference = full_source([200, 200, 200]);

    group.bench_function("load_complete", |b| {
        b.iter(|| load(black_box(&full), None).unwrap())
    });

    let mut minimal = SheetSet::new();
    {
        let (w, h) = sheet_dimensions(Sheet::Main);
        minimal.insert_sheet(Sheet::Main, solid_bmp(w, h, [40, 40, 40]));
    }

    group.bench_function("load_with_fallback", |b| {
        b.iter(|| load(black_box(&minimal), Some(black_box(&reference))).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_archive, bench_compose);
criterion_main!(benches);
