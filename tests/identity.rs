extern crate env_logger;
extern crate geom2d;

use std::thread;

use geom2d::prelude::*;

#[test]
fn scratch() {
    let _ = env_logger::try_init();

    reset_identity().unwrap();
    assert_eq!(math::identity().unwrap(), Rectangle::zero());

    let right = with_identity(|rect| rect.initialize(1.0, 2.0, 3.0, 4.0).right()).unwrap();
    assert_eq!(right, 4.0);

    // The value stays until the next writer.
    assert_eq!(identity().unwrap(), Rectangle::new(1.0, 2.0, 3.0, 4.0));
    with_identity(|rect| rect.set_bottom(10.0)).unwrap();
    assert_eq!(identity().unwrap(), Rectangle::new(1.0, 2.0, 3.0, 8.0));

    reset_identity().unwrap();
    assert_eq!(identity().unwrap(), Rectangle::zero());
}

#[test]
fn reentrant() {
    let _ = env_logger::try_init();

    let nested = with_identity(|outer| {
        outer.initialize(5.0, 5.0, 5.0, 5.0);
        with_identity(|inner| *inner.initialize(0.0, 0.0, 1.0, 1.0))
    })
    .unwrap();

    assert_eq!(nested, Err(Error::IdentityInUse));
    assert_eq!(identity().unwrap(), Rectangle::new(5.0, 5.0, 5.0, 5.0));
}

#[test]
fn isolation() {
    with_identity(|rect| {
        rect.initialize(7.0, 7.0, 7.0, 7.0);
    })
    .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let fresh = identity().unwrap();
                let v = i as f32;
                with_identity(|rect| {
                    rect.initialize(v, v, v, v);
                })
                .unwrap();
                (fresh, identity().unwrap())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (fresh, written) = handle.join().unwrap();
        let v = i as f32;
        assert_eq!(fresh, Rectangle::zero());
        assert_eq!(written, Rectangle::new(v, v, v, v));
    }

    assert_eq!(identity().unwrap(), Rectangle::new(7.0, 7.0, 7.0, 7.0));
}
