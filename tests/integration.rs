#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use py_resizer::{expand_home, Config, Dimensions, Executor};
    use std::path::PathBuf;

    fn config_with_scale(scale: i32) -> Config {
        Config {
            input_paths: vec![],
            scale,
            destination: PathBuf::from("."),
        }
    }

    #[test]
    fn test_resize_scales_both_sides() {
        let dimensions = Dimensions::new(800, 600);

        assert_eq!(dimensions.resize(50), Dimensions::new(400, 300));
        assert_eq!(dimensions.resize(25).as_pair(), (200, 150));
    }

    #[test]
    fn test_resize_truncates_toward_zero() {
        assert_eq!(Dimensions::new(3, 3).resize(50), Dimensions::new(1, 1));
        assert_eq!(Dimensions::new(799, 601).resize(10), Dimensions::new(79, 60));
    }

    #[test]
    fn test_resize_out_of_range_is_identity() {
        let dimensions = Dimensions::new(800, 600);

        for percent in [0, 100, -5, 150] {
            assert_eq!(dimensions.resize(percent), dimensions);
        }
    }

    #[test]
    fn test_scale_validity() {
        for scale in [0, 100, -5, 150] {
            assert!(!config_with_scale(scale).is_scale_valid());
        }

        for scale in 1..100 {
            assert!(config_with_scale(scale).is_scale_valid());
        }
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/foo"), home.join("foo"));
        }

        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("rel/path"), PathBuf::from("rel/path"));
    }

    #[test]
    fn test_resize_creates_destination_and_output() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("photo.jpg");

        let img = image::RgbImage::new(800, 600);
        img.save(input_path.path()).unwrap();

        let out_dir = temp_dir.child("out");
        assert!(!out_dir.path().exists());

        let executor = Executor::new(50, out_dir.path().to_path_buf());
        executor.process(input_path.path());

        let output = out_dir.child("photo_resized.jpg");
        assert!(output.path().exists());
        assert_eq!(
            image::image_dimensions(output.path()).unwrap(),
            (400, 300)
        );
    }

    #[test]
    fn test_failed_input_does_not_affect_others() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("photo.png");

        let img = image::RgbImage::new(10, 10);
        img.save(input_path.path()).unwrap();

        let out_dir = temp_dir.child("out");
        let executor = Executor::new(50, out_dir.path().to_path_buf());

        executor.process(input_path.path());
        executor.process(&temp_dir.path().join("missing.jpg"));

        let output = out_dir.child("photo_resized.png");
        assert!(output.path().exists());
        assert_eq!(image::image_dimensions(output.path()).unwrap(), (5, 5));
    }

    #[test]
    fn test_output_naming_keeps_stem_and_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("vacation.png");

        let img = image::RgbImage::new(4, 4);
        img.save(input_path.path()).unwrap();

        let out_dir = temp_dir.child("out");
        let executor = Executor::new(50, out_dir.path().to_path_buf());
        executor.process(input_path.path());

        assert!(out_dir.child("vacation_resized.png").path().exists());
    }

    #[test]
    fn test_undecodable_input_fails_before_destination_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("garbage.jpg");
        input_path.write_str("not an image").unwrap();

        let out_dir = temp_dir.child("out");
        let executor = Executor::new(50, out_dir.path().to_path_buf());
        executor.process(input_path.path());

        assert!(!out_dir.path().exists());
    }
}
