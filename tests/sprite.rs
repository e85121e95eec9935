use gorillas::engine::Color;
use gorillas::shot::Orientation;
use gorillas::sprite::*;

#[test]
fn ascii_rows_are_padded_to_the_widest() {
    let s = Sprite::from_ascii(&["X", "XXX", ""], Color::WHITE, Color::BLACK);
    assert_eq!(s.size(), (3, 3));
    assert_eq!(s.pixel(0, 0), Some(Color::WHITE));
    assert_eq!(s.pixel(2, 0), Some(Color::BLACK));
    assert_eq!(s.pixel(1, 1), Some(Color::WHITE));
    assert_eq!(s.pixel(0, 2), Some(Color::BLACK));
    assert_eq!(s.pixel(3, 0), None);
}

#[test]
fn mirrored_flips_each_row() {
    let s = Sprite::from_ascii(&["X  ", " XX"], Color::WHITE, Color::BLACK);
    let m = s.mirrored();
    assert_eq!(m.pixel(2, 0), Some(Color::WHITE));
    assert_eq!(m.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(m.pixel(0, 1), Some(Color::WHITE));
    assert_eq!(m.pixel(2, 1), Some(Color::BLACK));
    assert_eq!(m.mirrored(), s);
}

#[test]
fn sprite_sizes() {
    let set = SpriteSet::new();
    assert_eq!(set.gorilla_size(), (21, 19));
    for arms in [Arms::Down, Arms::LeftUp, Arms::RightUp] {
        assert_eq!(set.gorilla(arms).size(), (21, 19));
    }
    assert_eq!(set.banana(Orientation::Up).size(), (7, 4));
    assert_eq!(set.banana(Orientation::Down).size(), (7, 4));
    assert_eq!(set.banana(Orientation::Left).size(), (4, 7));
    assert_eq!(set.banana(Orientation::Right).size(), (4, 7));
    assert_eq!(set.sun(false).size(), set.sun(true).size());
    assert_eq!(set.star.size(), (7, 7));
}

#[test]
fn raised_arm_poses_mirror_each_other() {
    let set = SpriteSet::new();
    assert_eq!(&set.gorilla(Arms::LeftUp).mirrored(), set.gorilla(Arms::RightUp));
    assert_ne!(set.gorilla(Arms::LeftUp), set.gorilla(Arms::Down));
    assert_eq!(Arms::LeftUp.flip(), Arms::RightUp);
    assert_eq!(Arms::Down.flip(), Arms::Down);
}

#[test]
fn shocked_sun_looks_different() {
    let set = SpriteSet::new();
    assert_ne!(set.sun(false), set.sun(true));
}
