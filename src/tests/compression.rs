#[cfg(all(test, feature = "serde-bincode"))]
mod tests {
    use crate::{Compression, SerdeBincode, StashConfig, StashError, StashReader, StashWriter};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
    struct Curve {
        label: String,
        points: Vec<(u32, f64)>,
    }

    fn curve() -> Curve {
        Curve {
            label: "validation".repeat(20),
            points: (0..2_000).map(|i| (i, 1.0 / (i as f64 + 1.0))).collect(),
        }
    }

    fn zstd_cfg() -> StashConfig {
        StashConfig::builder()
            .compression(Compression::Zstd { level: 3 })
            .build()
    }

    #[test]
    fn zstd_roundtrip_and_smaller_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.bin");
        let packed = dir.path().join("packed.bin.zst");

        StashWriter::new(StashConfig::default(), SerdeBincode::<Curve>::new())
            .write(&plain, &curve())
            .unwrap();
        StashWriter::new(zstd_cfg(), SerdeBincode::<Curve>::new())
            .write(&packed, &curve())
            .unwrap();

        let plain_len = std::fs::metadata(&plain).unwrap().len();
        let packed_len = std::fs::metadata(&packed).unwrap().len();
        assert!(packed_len < plain_len, "{packed_len} >= {plain_len}");

        let got = StashReader::new(zstd_cfg(), SerdeBincode::<Curve>::new())
            .read(&packed)
            .unwrap();
        assert_eq!(got, curve());
    }

    #[test]
    fn zstd_file_read_without_compression_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packed.bin.zst");
        StashWriter::new(zstd_cfg(), SerdeBincode::<Curve>::new())
            .write(&path, &curve())
            .unwrap();

        let err = StashReader::new(StashConfig::default(), SerdeBincode::<Curve>::new())
            .read(&path)
            .unwrap_err();
        assert!(matches!(err, StashError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn plain_file_read_with_zstd_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.bin");
        crate::write(&path, &curve()).unwrap();

        let err = StashReader::new(zstd_cfg(), SerdeBincode::<Curve>::new())
            .read(&path)
            .unwrap_err();
        assert!(matches!(err, StashError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn truncated_zstd_frame_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packed.bin.zst");
        StashWriter::new(zstd_cfg(), SerdeBincode::<Curve>::new())
            .write(&path, &curve())
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let err = StashReader::new(zstd_cfg(), SerdeBincode::<Curve>::new())
            .read(&path)
            .unwrap_err();
        assert!(matches!(err, StashError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn builder_defaults() {
        let cfg = StashConfig::default();
        assert_eq!(cfg.compression, Compression::None);
        assert!(!cfg.sync);
        assert_eq!(cfg.read_buffer, 64 * 1024);

        let cfg = StashConfig::builder().read_buffer(0).write_buffer(0).build();
        assert_eq!((cfg.read_buffer, cfg.write_buffer), (1, 1));
    }
}
