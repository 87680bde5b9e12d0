//! Integration tests for the raster-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between `raster-core` and `raster-ops`.

#[cfg(test)]
mod tests {
    use raster_core::pixel::{argb, blue, green, red};
    use raster_core::{ArgbBuffer, ElementRange, PixelBuffer, PixelHandle};
    use raster_ops::{apply, blend_images, BlendMode, BlendOp};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// The reference end-to-end case: a 1x1 opaque white top buffer
    /// composited over a transparent 2x2 bottom buffer at offset (1, 1)
    /// touches exactly one pixel.
    #[test]
    fn test_offset_blend_touches_single_pixel() {
        let bottom = ArgbBuffer::from_vec(2, 2, vec![0x00000000; 4]).unwrap();
        let top = ArgbBuffer::from_vec(1, 1, vec![0xffffffff]).unwrap();

        blend_images(
            &bottom,
            &top,
            1,
            1,
            BlendOp::Alpha {
                mode: BlendMode::Normal,
                opacity: 1.0,
            },
            true,
        )
        .expect("blend failed");

        assert_eq!(
            bottom.snapshot(),
            vec![0x00000000, 0x00000000, 0x00000000, 0xffffffff]
        );
    }

    /// Parallel and sequential application of the same deterministic
    /// composite must produce identical buffers, for every blend variant.
    #[test]
    fn test_parallel_equals_sequential_for_all_modes() {
        let width = 37u32;
        let height = 23u32;
        let pattern: Vec<u32> = (0..width * height)
            .map(|i| argb(0xff, (i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8))
            .collect();
        let top_pattern: Vec<u32> = (0..width * height)
            .map(|i| argb((i * 5 % 256) as u8, (i * 3 % 256) as u8, (i * 11 % 256) as u8, (i % 256) as u8))
            .collect();

        for &mode in &BlendMode::ALL {
            let seq = ArgbBuffer::from_vec(width, height, pattern.clone()).unwrap();
            let par = ArgbBuffer::from_vec(width, height, pattern.clone()).unwrap();
            let top = ArgbBuffer::from_vec(width, height, top_pattern.clone()).unwrap();
            let op = BlendOp::Alpha { mode, opacity: 0.7 };

            blend_images(&seq, &top, 3, -2, op, false).unwrap();
            blend_images(&par, &top, 3, -2, op, true).unwrap();

            assert_eq!(seq.snapshot(), par.snapshot(), "mode {mode}");
        }
    }

    /// A forced-fine split still covers every pixel exactly once.
    #[test]
    fn test_fine_grained_split_coverage() {
        let buf = ArgbBuffer::new(40, 25).unwrap();
        let invocations = AtomicUsize::new(0);

        apply(
            buf.pixels().with_min_split(3),
            &|px: &mut PixelHandle<'_, ArgbBuffer>| {
                invocations.fetch_add(1, Ordering::Relaxed);
                px.set_value(px.value() + 1);
                Ok(())
            },
            true,
        )
        .unwrap();

        assert_eq!(invocations.load(Ordering::Relaxed), 1000);
        assert!(buf.snapshot().iter().all(|&v| v == 1));
    }

    /// Element-typed traversal through the adapter, run in parallel:
    /// one scratch per leaf, round trip applied everywhere.
    #[test]
    fn test_parallel_element_adapter() {
        let width = 16u32;
        let height = 16u32;
        let data: Vec<u32> = (0..width * height)
            .map(|i| argb(0xff, (i % 256) as u8, ((i * 2) % 256) as u8, ((i * 3) % 256) as u8))
            .collect();
        let buf = ArgbBuffer::from_vec(width, height, data.clone()).unwrap();

        let allocations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&allocations);
        let range = ElementRange::new(
            buf.pixels().with_min_split(16),
            move || {
                counter.fetch_add(1, Ordering::Relaxed);
                [0u8; 3]
            },
            |px: &PixelHandle<'_, ArgbBuffer>, e: &mut [u8; 3]| {
                let v = px.value();
                *e = [red(v), green(v), blue(v)];
            },
            |e: &[u8; 3], px: &mut PixelHandle<'_, ArgbBuffer>| {
                px.set_value(argb(0xff, e[0], e[1], e[2]));
            },
        );

        // Invert every channel through the richer element type.
        apply(
            range,
            &|e: &mut [u8; 3]| {
                e[0] = 0xff - e[0];
                e[1] = 0xff - e[1];
                e[2] = 0xff - e[2];
                Ok(())
            },
            true,
        )
        .unwrap();

        let allocs = allocations.load(Ordering::Relaxed);
        assert!(allocs >= 2, "parallel run should have split at least once");
        assert!(
            allocs < (width * height) as usize,
            "scratch must not be allocated per pixel (got {allocs})"
        );

        for (i, &v) in buf.snapshot().iter().enumerate() {
            let expected = argb(
                0xff,
                0xff - red(data[i]),
                0xff - green(data[i]),
                0xff - blue(data[i]),
            );
            assert_eq!(v, expected, "pixel {i}");
        }
    }

    /// An action failure inside a parallel traversal surfaces after the
    /// join instead of being swallowed.
    #[test]
    fn test_action_error_propagates_through_parallel_apply() {
        let buf = ArgbBuffer::new(30, 30).unwrap();
        let err = apply(
            buf.pixels().with_min_split(10),
            &|px: &mut PixelHandle<'_, ArgbBuffer>| {
                if px.x() == 17 && px.y() == 22 {
                    Err(raster_core::Error::action("bad pixel"))
                } else {
                    px.set_value(0xff0000ff);
                    Ok(())
                }
            },
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("bad pixel"));
    }

    /// RGB-only composition across buffers of different sizes: pixels the
    /// top buffer does not cover keep their original value.
    #[test]
    fn test_partial_overlap_rgb_blend() {
        let bottom = ArgbBuffer::from_vec(4, 1, vec![argb(0x80, 100, 100, 100); 4]).unwrap();
        let top = ArgbBuffer::from_vec(2, 1, vec![argb(0xff, 50, 50, 50); 2]).unwrap();

        blend_images(&bottom, &top, 1, 0, BlendOp::Rgb(BlendMode::Darken), true).unwrap();

        let untouched = argb(0x80, 100, 100, 100);
        let darkened = argb(0x80, 50, 50, 50);
        assert_eq!(
            bottom.snapshot(),
            vec![untouched, darkened, darkened, untouched]
        );
    }
}
