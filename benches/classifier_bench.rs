// ABOUTME: Criterion benchmarks for wellness-note classification and fatigue assessment
// ABOUTME: Measures per-note latency, batch throughput and engine-level note reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recovery intelligence engine.
//!
//! Covers the classifier on short and long notes, batch classification, the
//! fatigue trigger evaluation, and `report_from_notes` over the in-memory store.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_recovery::database::InMemoryInjuryRepository;
use pierre_recovery::intelligence::{
    EngineConfig, FatigueAnalyzer, FatigueSignals, Lexicon, TextClassifier,
};
use pierre_recovery::models::{Workout, WorkoutSet};
use pierre_recovery::providers::{InMemoryReadiness, InMemoryWorkoutHistory};
use pierre_recovery::RecoveryEngine;
use std::sync::Arc;
use tokio::runtime::Runtime;
use uuid::Uuid;

const SAMPLE_NOTES: &[&str] = &[
    "Great session today, hit every set",
    "I killed that deadlift, legs are dead",
    "Quads are sore from yesterday, classic DOMS",
    "Slight twinge in my wrist during presses",
    "My lower back feels really sharp and it hurts to bend, been getting worse for days",
    "Knee is swollen and I can't put weight on it",
    "Pulled my hamstring sprinting",
    "Nagging ache in my elbow, still there after a week",
];

/// Long free-text note padded with filler training chatter
fn long_note(sentences: usize) -> String {
    let mut note = String::new();
    for index in 0..sentences {
        note.push_str("Warmed up with rows, then squats and presses felt smooth. ");
        if index == sentences / 2 {
            note.push_str("Right shoulder has a nagging ache on overhead work. ");
        }
    }
    note
}

fn bench_single_note(c: &mut Criterion) {
    let classifier = TextClassifier::with_defaults().unwrap();
    let mut group = c.benchmark_group("classify_note");

    for (index, notes) in SAMPLE_NOTES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("sample", index), notes, |b, notes| {
            b.iter(|| classifier.analyze(black_box(notes)));
        });
    }

    for sentences in [10, 50, 200] {
        let note = long_note(sentences);
        group.throughput(Throughput::Bytes(note.len() as u64));
        group.bench_with_input(BenchmarkId::new("long_note", sentences), &note, |b, note| {
            b.iter(|| classifier.analyze(black_box(note)));
        });
    }

    group.finish();
}

fn bench_batch_classification(c: &mut Criterion) {
    let classifier = TextClassifier::with_defaults().unwrap();
    let mut group = c.benchmark_group("classify_batch");

    for count in [100_usize, 1_000] {
        let notes: Vec<&str> = SAMPLE_NOTES.iter().copied().cycle().take(count).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &notes, |b, notes| {
            b.iter(|| {
                notes
                    .iter()
                    .filter(|note| classifier.analyze(black_box(note)).injury_detected)
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_lexicon_compile(c: &mut Criterion) {
    c.bench_function("compile_default_lexicon", |b| {
        b.iter(|| TextClassifier::new(black_box(Lexicon::default()), Default::default()).unwrap());
    });
}

fn bench_fatigue_assessment(c: &mut Criterion) {
    let analyzer = FatigueAnalyzer::default();
    let signals = FatigueSignals {
        volume_increase: Some(0.35),
        average_rpe: Some(8.8),
        readiness_declining: true,
        readiness_score: Some(64.0),
    };

    c.bench_function("fatigue_assess_and_prescribe", |b| {
        b.iter(|| {
            let assessment = analyzer.assess(black_box(&signals));
            let level = analyzer.determine_fatigue_level(assessment.reasons.len());
            analyzer.calculate_deload_volume(level)
        });
    });
}

fn bench_engine_reporting(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let workouts = Arc::new(InMemoryWorkoutHistory::new());
    let engine = RecoveryEngine::new(
        &EngineConfig::default(),
        Lexicon::default(),
        Arc::new(InMemoryInjuryRepository::new()),
        workouts.clone(),
        Arc::new(InMemoryReadiness::new()),
    )
    .unwrap();

    let user_id = Uuid::new_v4();
    let now = Utc::now();
    for day in 0..28 {
        let workout = Workout {
            id: Uuid::new_v4(),
            user_id,
            start_time: now - Duration::days(day),
        };
        let sets = (0..5)
            .map(|set| WorkoutSet {
                workout_id: workout.id,
                weight: 80.0 + f64::from(set) * 5.0,
                reps: 8,
                rpe: Some(7.5 + day as f64 / 28.0),
            })
            .collect();
        workouts.add_workout(workout, sets);
    }

    c.bench_function("report_from_notes", |b| {
        b.to_async(&rt).iter(|| async {
            engine
                .report_from_notes(user_id, black_box("Tweaked my calf, sharp pain"))
                .await
                .unwrap()
        });
    });

    c.bench_function("assess_fatigue_28_days", |b| {
        b.to_async(&rt)
            .iter(|| async { engine.fatigue().assess_fatigue(black_box(user_id)).await.unwrap() });
    });
}

criterion_group!(
    benches,
    bench_single_note,
    bench_batch_classification,
    bench_lexicon_compile,
    bench_fatigue_assessment,
    bench_engine_reporting
);
criterion_main!(benches);
