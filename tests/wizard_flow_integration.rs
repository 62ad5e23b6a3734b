mod support;

use std::sync::Arc;
use std::time::{Duration, Instant};

use mlwizard::egui_app::controller::EguiController;
use mlwizard::egui_app::state::StepForm;
use mlwizard::egui_app::view_model;
use mlwizard::pipeline::{ModelKind, PreprocessMethod, TestFraction, WizardStep};
use mlwizard::settings::AppSettings;
use support::scripted_service::{ScriptedService, training_result};

fn controller_with(service: Arc<ScriptedService>) -> EguiController {
    EguiController::new(service, AppSettings::default())
}

fn settle(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while controller.is_busy() {
        assert!(Instant::now() < deadline, "background step never finished");
        std::thread::sleep(Duration::from_millis(5));
        controller.tick();
    }
}

fn uploaded(service: &Arc<ScriptedService>) -> EguiController {
    let mut controller = controller_with(service.clone());
    controller.upload_file("data/iris.csv".into());
    settle(&mut controller);
    controller
}

#[test]
fn upload_moves_to_preprocess_with_dataset_columns() {
    let service = Arc::new(ScriptedService::default());
    let controller = uploaded(&service);

    assert_eq!(controller.current_step(), WizardStep::Preprocess);
    let dataset = controller.wizard().dataset().unwrap();
    assert_eq!(dataset.row_count, 100);
    assert_eq!(dataset.column_names, vec!["a", "b", "c"]);
    let preview = view_model::preview_table(&dataset.column_names, &dataset.preview_rows);
    assert_eq!(preview.header, vec!["a", "b", "c"]);
    assert_eq!(preview.rows[0], vec!["5.1", "3.5", "0"]);
    assert_eq!(
        controller.ui.status.text,
        "Dataset uploaded: 100 rows, 3 columns"
    );
    assert_eq!(service.requests(), vec!["upload iris.csv"]);
}

#[test]
fn rejected_upload_stays_on_upload_with_service_message() {
    let service = Arc::new(ScriptedService::default());
    *service.upload.lock().unwrap() = Err("File type not allowed".into());
    let mut controller = controller_with(service.clone());

    controller.upload_file("data/iris.csv".into());
    settle(&mut controller);

    assert_eq!(controller.current_step(), WizardStep::Upload);
    match &controller.ui.form {
        StepForm::Upload(form) => {
            assert_eq!(form.error.as_deref(), Some("File type not allowed"))
        }
        other => panic!("unexpected form {other:?}"),
    }
}

#[test]
fn preprocess_without_columns_sends_nothing() {
    let service = Arc::new(ScriptedService::default());
    let mut controller = uploaded(&service);

    controller.select_preprocess_method(PreprocessMethod::Standardization);
    assert!(!controller.can_apply_preprocessing());
    controller.apply_preprocessing();
    settle(&mut controller);

    assert_eq!(controller.current_step(), WizardStep::Preprocess);
    assert_eq!(service.requests().len(), 1);
}

#[test]
fn full_flow_reaches_results_and_resets() {
    let service = Arc::new(ScriptedService::default());
    let mut controller = uploaded(&service);

    controller.select_preprocess_method(PreprocessMethod::Normalization);
    controller.toggle_preprocess_column("b");
    controller.toggle_preprocess_column("a");
    controller.apply_preprocessing();
    settle(&mut controller);
    assert_eq!(controller.current_step(), WizardStep::Split);

    controller.set_test_fraction(TestFraction::from_percent(20));
    controller.select_target_column(Some("c".into()));
    controller.split_dataset();
    settle(&mut controller);
    assert_eq!(controller.current_step(), WizardStep::ModelSelect);
    assert_eq!(
        controller.ui.status.text,
        "Data split successfully! Training: 80 samples, Testing: 20 samples"
    );

    controller.select_model(ModelKind::LogisticRegression);
    controller.train_model();
    settle(&mut controller);
    assert_eq!(controller.current_step(), WizardStep::Results);
    assert_eq!(controller.wizard().training().unwrap().accuracy, 0.95);

    assert_eq!(
        service.requests(),
        vec![
            "upload iris.csv",
            "preprocess uploads/iris.csv normalization [a,b]",
            "split uploads/processed_iris.csv 0.2 c",
            "train logistic_regression c",
        ]
    );

    controller.start_new_pipeline();
    assert_eq!(controller.current_step(), WizardStep::Upload);
    assert!(controller.wizard().dataset().is_none());
    assert!(matches!(controller.ui.form, StepForm::Upload(_)));
}

#[test]
fn split_labels_follow_test_fraction() {
    let labels = view_model::split_labels(TestFraction::from_fraction(0.2));
    assert_eq!(labels.training, "Training set: 80%");
    assert_eq!(labels.test, "Test set: 20%");
}

#[test]
fn results_texts_reflect_accuracy() {
    let result = training_result(0.95);
    assert_eq!(view_model::format_percent(result.accuracy), "95.00%");
    assert_eq!(
        view_model::accuracy_remark(result.accuracy),
        "This is an excellent result!"
    );

    let rows = view_model::class_rows(&result.classification_report);
    let labels: Vec<_> = rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "1"]);
    let averages = view_model::average_rows(&result.classification_report);
    let labels: Vec<_> = averages.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["macro avg", "weighted avg"]);

    let bars = view_model::feature_bars(&result.feature_importance);
    assert_eq!(bars[0].name, "a");
    assert!(view_model::confusion_matrix(&result).is_none());
}
