use std::sync::Arc;
use std::thread;

use face_overlay::graphic::DrawCall;
use face_overlay::{
    AssetId, CameraFacing, FaceGraphicRegistry, FaceObservationBuilder, GraphicOverlay, IntRect,
    OverlayConfig, RecordingCanvas, StaticAssets, UNCOMPUTED_PROBABILITY,
};

type Canvas = RecordingCanvas<String>;

fn registry(overlay: &GraphicOverlay<Canvas>) -> FaceGraphicRegistry<Canvas, StaticAssets<String>> {
    FaceGraphicRegistry::new(
        overlay.clone(),
        Arc::new(StaticAssets::named()),
        OverlayConfig::default(),
    )
}

#[test]
fn test_frames_drive_overlay() {
    let _ = env_logger::builder().is_test(true).try_init();

    let overlay = GraphicOverlay::new();
    overlay.set_camera_info(320, 240, CameraFacing::Back);
    overlay.set_view_size(640, 480);
    let mut registry = registry(&overlay);

    // Frame 1: one face, eyes unknown, broad smile
    let face = FaceObservationBuilder::new()
        .tlwh(100.0, 60.0, 60.0, 60.0)
        .eyes_open(UNCOMPUTED_PROBABILITY, 0.55)
        .smiling(0.8)
        .build();
    registry.apply_frame(&[(1, face)]);
    assert!(overlay.take_invalidated());

    let mut canvas = Canvas::new();
    overlay.draw(&mut canvas).unwrap();

    // Center (130, 90) -> (260, 180); half extents 20 * 2 * 2 = 80 each way.
    let drawn: Vec<_> = canvas
        .images()
        .map(|(name, bounds)| (name.clone(), bounds))
        .collect();
    assert_eq!(
        drawn,
        vec![
            ("ears_small".to_string(), IntRect::new(180, 100, 340, 180)),
            (
                "female_003_left_eye01".to_string(),
                IntRect::new(180, 135, 340, 260)
            ),
            (
                "female_003_right_eye03".to_string(),
                IntRect::new(180, 135, 340, 260)
            ),
            (
                "female_003_smile03".to_string(),
                IntRect::new(180, 190, 340, 260)
            ),
        ]
    );

    // Frame 2: face lost; nothing is drawn.
    registry.apply_frame(&[]);
    let mut canvas = Canvas::new();
    overlay.draw(&mut canvas).unwrap();
    assert!(canvas.calls().is_empty());
}

#[test]
fn test_head_roll_hysteresis_across_frames() {
    let overlay = GraphicOverlay::new();
    let mut registry = registry(&overlay);
    let mut applied = Vec::new();

    for roll in [0.0, 1.5, 3.0, 3.1] {
        let face = FaceObservationBuilder::new()
            .tlwh(0.0, 0.0, 30.0, 30.0)
            .euler_z(roll)
            .build();
        registry.apply_frame(&[(5, face)]);

        let mut canvas = Canvas::new();
        overlay.draw(&mut canvas).unwrap();
        assert_eq!(canvas.count_saves(), canvas.count_restores());

        let rotation = canvas.calls().iter().find_map(|call| match call {
            DrawCall::Rotate { degrees, .. } => Some(*degrees),
            _ => None,
        });
        applied.push(rotation.unwrap_or(0.0));
    }

    assert_eq!(applied, vec![0.0, 0.0, 3.0, 3.0]);
}

#[test]
fn test_updates_from_detector_thread() {
    let overlay = GraphicOverlay::new();
    let mut registry = registry(&overlay);
    registry.apply_frame(&[(1, FaceObservationBuilder::new().tlwh(0.0, 0.0, 30.0, 30.0).build())]);
    let graphic = Arc::clone(registry.graphic(1).unwrap());

    let producer = thread::spawn(move || {
        for i in 0..500 {
            let face = FaceObservationBuilder::new()
                .tlwh(i as f32, i as f32, 30.0, 30.0)
                .smiling(0.9)
                .build();
            graphic.update(face);
        }
    });

    for _ in 0..200 {
        let mut canvas = Canvas::new();
        overlay.draw(&mut canvas).unwrap();
        assert_eq!(canvas.images().count(), 4);
    }
    producer.join().unwrap();
}

#[test]
fn test_missing_asset_surfaces_from_draw() {
    let overlay = GraphicOverlay::new();
    let mut assets = StaticAssets::named();
    assets.remove(AssetId::Ears);

    let mut registry = FaceGraphicRegistry::new(
        overlay.clone(),
        Arc::new(assets),
        OverlayConfig::default(),
    );
    registry.apply_frame(&[(1, FaceObservationBuilder::new().tlwh(0.0, 0.0, 30.0, 30.0).build())]);

    let mut canvas = Canvas::new();
    assert!(overlay.draw(&mut canvas).is_err());
    assert!(canvas.calls().is_empty());
}
