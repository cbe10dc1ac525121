use criterion::{black_box, criterion_group, criterion_main, Criterion};

use intakeflow_core::{Department, DocumentFields};
use intakeflow_workflow::generate_workflow;

fn finance_fields() -> DocumentFields {
    DocumentFields {
        amounts: vec![
            "₹45,000.00".to_string(),
            "$1,250.00".to_string(),
            "2024".to_string(),
            "99.99".to_string(),
        ],
        ..DocumentFields::default()
    }
}

fn hr_fields() -> DocumentFields {
    DocumentFields {
        raw: Some(
            "The workload imbalance is causing stress and burnout across the team; \
             morale is low and several engineers mentioned leaving."
                .to_string(),
        ),
        ..DocumentFields::default()
    }
}

fn bench_engine(c: &mut Criterion) {
    let finance = finance_fields();
    c.bench_function("workflow/finance_thresholding", |b| {
        b.iter(|| generate_workflow(black_box(Department::Finance), black_box(&finance)))
    });

    let hr = hr_fields();
    c.bench_function("workflow/hr_cascade", |b| {
        b.iter(|| generate_workflow(black_box(Department::Hr), black_box(&hr)))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
