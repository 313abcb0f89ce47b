use super::*;

#[test]
fn length_is_longest_animation() {
    let t = FrameTimeline::new(vec![3, 10, 4]).unwrap();
    assert_eq!(t.len(), 10);
}

#[test]
fn shorter_animations_cycle() {
    let t = FrameTimeline::new(vec![3, 5, 1]).unwrap();
    for frame in 0..t.len() {
        let sources: Vec<usize> = t.sources(frame).collect();
        assert_eq!(sources, vec![frame % 3, frame % 5, 0]);
        assert_eq!(t.source_frame(frame, 0), frame % 3);
    }
}

#[test]
fn rejects_empty_strip_and_zero_frame_digits() {
    assert!(matches!(
        FrameTimeline::new(vec![]),
        Err(CounterError::InvalidParameter(_))
    ));
    assert!(FrameTimeline::new(vec![2, 0]).is_err());
}
