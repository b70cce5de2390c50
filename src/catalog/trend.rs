//! Compact table behind the recent-trend estimate.
//!
//! Tokens use the capitalized labels of the symptom picker, so entries
//! recorded from the quick-pick list match directly.

use super::{Catalog, IllnessPattern};

pub fn recent_trend_catalog() -> Catalog {
    Catalog::new(vec![
        IllnessPattern::new(
            "Common Cold",
            &["Cough", "Sore Throat", "Runny Nose", "Congestion", "Sneezing"],
        )
        .with_base_confidence(0.8)
        .recommend(&[
            "Rest and get plenty of sleep",
            "Stay hydrated with water and warm fluids",
            "Use over-the-counter cold medications as needed",
            "Use a humidifier to ease congestion",
        ])
        .avoid(&[
            "Avoid close contact with others",
            "Don't share personal items",
            "Avoid smoking and secondhand smoke",
        ]),
        IllnessPattern::new(
            "Flu",
            &["Fever", "Body Aches", "Fatigue", "Cough", "Chills"],
        )
        .with_base_confidence(0.9)
        .recommend(&[
            "Rest and stay in bed",
            "Take prescribed antiviral medications if available",
            "Stay hydrated with water and electrolyte drinks",
            "Use fever-reducing medications as needed",
        ])
        .avoid(&[
            "Avoid public places",
            "Don't share utensils or cups",
            "Avoid strenuous exercise",
        ]),
        IllnessPattern::new(
            "Stomach Bug",
            &["Nausea", "Vomiting", "Diarrhea", "Stomach Pain", "Loss of Appetite"],
        )
        .with_base_confidence(0.85)
        .recommend(&[
            "Stay hydrated with small sips of water",
            "Eat bland foods when able",
            "Rest and avoid strenuous activity",
            "Use anti-nausea medications if prescribed",
        ])
        .avoid(&[
            "Avoid dairy products",
            "Don't share food or drinks",
            "Avoid spicy or fatty foods",
        ]),
        IllnessPattern::new(
            "Sinus Infection",
            &["Congestion", "Sinus Pressure", "Headache", "Cough", "Fatigue"],
        )
        .with_base_confidence(0.75)
        .recommend(&[
            "Use saline nasal spray",
            "Apply warm compresses to face",
            "Stay hydrated",
            "Use over-the-counter decongestants",
        ])
        .avoid(&[
            "Avoid swimming",
            "Don't smoke",
            "Avoid air travel if possible",
        ]),
        IllnessPattern::new(
            "Bronchitis",
            &["Cough", "Chest Congestion", "Fatigue", "Shortness of Breath", "Wheezing"],
        )
        .with_base_confidence(0.8)
        .recommend(&[
            "Use a humidifier",
            "Stay hydrated",
            "Take prescribed medications",
            "Avoid smoke and irritants",
        ])
        .avoid(&[
            "Avoid smoke and air pollution",
            "Don't exercise outdoors",
            "Avoid cold air exposure",
        ]),
    ])
}
