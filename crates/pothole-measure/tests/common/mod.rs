#![allow(dead_code)]

use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

pub const SCENE_SIZE: u32 = 200;

/// 30x40 reference above a 60x80 object, white on black.
pub fn reference_and_object() -> GrayImage {
    let mut img = GrayImage::new(SCENE_SIZE, SCENE_SIZE);
    fill(&mut img, 30, 20, 30, 40);
    fill(&mut img, 80, 100, 60, 80);
    img
}

pub fn blank() -> GrayImage {
    GrayImage::new(SCENE_SIZE, SCENE_SIZE)
}

pub fn fill(img: &mut GrayImage, x: i32, y: i32, w: u32, h: u32) {
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(w, h), Luma([255u8]));
}

pub fn write_scene(dir: &Path, name: &str, img: &GrayImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("write scene");
    path
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
