//! Fit command implementation

use crate::cli::logging::log;
use crate::cli::{FitArgs, LogLevel};
use crate::config::{load_config, validate_config, LearnerConfig};
use crate::data::{blobs_data_bunch, ClassIndices, DataBunch, InMemoryDataset, Target};
use crate::error::Result;
use crate::nn::Mlp;
use crate::optim::SGD;
use crate::train::{
    Accuracy, AvgMetric, CrossEntropyLoss, FitSummary, GradientClipping, JsonLinesReporter,
    Learner, LossFn, Metric, ProgressDelegate, Reporter, StdoutReporter, TrainEvalDelegate,
};
use ndarray::Array2;
use std::io;

/// Apply command-line overrides to a config
pub fn apply_overrides(config: &mut LearnerConfig, args: &FitArgs) {
    if let Some(epochs) = args.epochs {
        config.epochs = epochs;
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(lr) = args.lr {
        config.learning_rate = lr;
    }
    if args.one_hot {
        config.one_hot = true;
    }
}

/// Train the sample network described by `config`
///
/// Generates the blob dataset, registers the standard delegates
/// (bookkeeping, optional clipping, progress, averaged validation loss and
/// accuracy sent to `reporter`) and runs `fit`.
pub fn run_fit<R: Reporter + 'static>(config: &LearnerConfig, reporter: R) -> Result<FitSummary> {
    let data = blobs_data_bunch(&config.data, config.batch_size, config.seed)?;

    if config.one_hot {
        let classes = config.data.classes;
        let to_one_hot = |labels: ClassIndices| labels.to_one_hot(classes);
        let data = DataBunch::new(
            data.train.map_labels(to_one_hot)?,
            data.valid.map_labels(to_one_hot)?,
        );
        fit_with_labels(config, data, reporter)
    } else {
        fit_with_labels(config, data, reporter)
    }
}

fn fit_with_labels<L, R>(
    config: &LearnerConfig,
    data: DataBunch<InMemoryDataset<Array2<f32>, L>>,
    reporter: R,
) -> Result<FitSummary>
where
    L: Target + 'static,
    R: Reporter + 'static,
    CrossEntropyLoss: LossFn<Array2<f32>, L>,
    Accuracy: Metric<Array2<f32>, L>,
{
    let (features, hidden, classes, seed) = (
        config.data.features,
        config.hidden_size,
        config.data.classes,
        config.seed,
    );
    let optimizer = SGD::new(config.learning_rate, config.momentum);

    let mut learner = Learner::new(data, CrossEntropyLoss, optimizer, || {
        Mlp::new(features, hidden, classes, seed)
    })
    .freeze_during_validation(config.freeze_during_validation)
    .with_delegate(TrainEvalDelegate::new());

    if let Some(max_norm) = config.grad_clip {
        learner.add_delegate(GradientClipping::new(max_norm));
    }
    learner.add_delegate(ProgressDelegate::new(config.log_interval));
    learner.add_delegate(
        AvgMetric::<Mlp, L>::new()
            .with_metric(Accuracy)
            .with_reporter(reporter),
    );

    learner.fit(config.epochs)
}

pub(super) fn run_fit_command(args: FitArgs, level: LogLevel) -> std::result::Result<(), String> {
    let mut config = match &args.config {
        Some(path) => load_config(path).map_err(|e| e.to_string())?,
        None => LearnerConfig::default(),
    };
    apply_overrides(&mut config, &args);
    validate_config(&config).map_err(|e| format!("Invalid config: {e}"))?;

    if !args.json {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "Training for {} epochs (batch size {}, lr {})",
                config.epochs, config.batch_size, config.learning_rate
            ),
        );
    }

    let summary = if args.json {
        run_fit(&config, JsonLinesReporter::new(io::stdout()))
    } else {
        run_fit(&config, StdoutReporter)
    }
    .map_err(|e| e.to_string())?;

    if args.json {
        let line = serde_json::to_string(&summary).map_err(|e| e.to_string())?;
        println!("{line}");
    } else {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "✓ {} epochs, {} iterations, final loss {:.4}{} ({:.2}s)",
                summary.epochs_completed,
                summary.iterations,
                summary.final_loss,
                if summary.stopped_early { " (stopped early)" } else { "" },
                summary.elapsed_secs
            ),
        );
    }
    Ok(())
}
