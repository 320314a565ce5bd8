use std::fs::File;

use nimbus_core::animation::assemble;
use nimbus_core::convert::PalettedFrame;
use nimbus_core::encode::write_gif;

fn frame(fill: u8) -> PalettedFrame {
    PalettedFrame {
        width: 4,
        height: 4,
        indices: vec![fill; 16],
    }
}

#[test]
fn test_write_and_read_back() {
    let anim = assemble(vec![frame(3), frame(200)], 7, true);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.gif");
    write_gif(&anim, &path).unwrap();

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(File::open(&path).unwrap()).unwrap();
    assert_eq!(decoder.width(), 4);
    assert_eq!(decoder.height(), 4);
    assert!(decoder.global_palette().is_some());

    let mut frames = 0;
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        assert_eq!(frame.delay, 7);
        frames += 1;
    }
    assert_eq!(frames, 2);
}

#[test]
fn test_write_play_once() {
    let anim = assemble(vec![frame(1)], 5, false);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("once.gif");
    write_gif(&anim, &path).unwrap();
    assert!(path.exists());
}
