use ferrite_saxpy::{Initialized, KernelConfig};

fn main() {
    let config = KernelConfig::float_default();

    let validation = Initialized::from_config(&config)
        .transform(config.alpha)
        .transform_repeated(config.alpha, config.repetitions - 1)
        .validate_against(config.alpha);

    println!("{}", validation.outcome);
}
