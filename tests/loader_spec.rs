use penguin_api::context::AppContext;
use penguin_api::error::StartupError;
use penguin_api::models::{Island, PenguinFeatures, Sex};
use speculate2::speculate;

mod support;

const LABELS: [&str; 3] = ["Adelie", "Chinstrap", "Gentoo"];

fn torgersen_male() -> PenguinFeatures {
    PenguinFeatures {
        bill_length_mm: 45.0,
        bill_depth_mm: 14.0,
        flipper_length_mm: 210.0,
        body_mass_g: 5000.0,
        year: 2007,
        sex: Sex::Male,
        island: Island::Torgersen,
    }
}

speculate! {
    before {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
    }

    describe "loading" {
        it "loads the artifact and both metadata documents" {
            support::write_artifacts(dir.path(), &LABELS);

            let context = AppContext::load(dir.path()).expect("Failed to load context");

            assert_eq!(context.feature_columns().len(), 10);
            assert_eq!(context.feature_columns()[0], "bill_length_mm");
        }

        it "fails with ModelLoad when the artifact is absent" {
            support::write_artifacts(dir.path(), &LABELS);
            std::fs::remove_file(dir.path().join("model.json")).expect("remove artifact");

            let err = AppContext::load(dir.path()).unwrap_err();

            assert!(matches!(err, StartupError::ModelLoad { .. }));
        }

        it "fails with ModelLoad when the artifact is malformed" {
            support::write_artifacts(dir.path(), &LABELS);
            std::fs::write(dir.path().join("model.json"), b"{").expect("truncate artifact");

            let err = AppContext::load(dir.path()).unwrap_err();

            assert!(matches!(err, StartupError::ModelLoad { .. }));
        }

        it "fails with MetadataLoad when feature_columns is missing" {
            support::write_artifacts(dir.path(), &LABELS);
            std::fs::write(
                dir.path().join("preprocess_meta.json"),
                br#"{"columns": []}"#,
            ).expect("rewrite meta");

            let err = AppContext::load(dir.path()).unwrap_err();

            assert!(matches!(err, StartupError::MetadataLoad { .. }));
        }

        it "fails with MetadataLoad when the label document is not valid JSON" {
            support::write_artifacts(dir.path(), &LABELS);
            std::fs::write(dir.path().join("label_classes.json"), b"not json").expect("rewrite labels");

            let err = AppContext::load(dir.path()).unwrap_err();

            assert!(matches!(err, StartupError::MetadataLoad { .. }));
        }
    }

    describe "classification" {
        before {
            support::write_artifacts(dir.path(), &LABELS);
            let context = AppContext::load(dir.path()).expect("Failed to load context");
        }

        it "maps the predicted class to its label" {
            let outcome = context.classify(&torgersen_male()).expect("classify");

            assert_eq!(outcome.prediction, 2);
            assert_eq!(outcome.species, "Gentoo");
        }

        it "is deterministic for a fixed request" {
            let first = context.classify(&torgersen_male()).expect("classify");
            let second = context.classify(&torgersen_male()).expect("classify");

            assert_eq!(first, second);
        }
    }
}
