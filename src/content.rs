//! The Segment Anything Model (SAM) project documentation.
//!
//! All text is fixed; only the "Generated" timestamp varies between runs.

use chrono::NaiveDateTime;

use crate::builder::DocumentBuilder;
use crate::model::{BlockStyle, Document, Metadata, TIMESTAMP_FORMAT};

/// Title of the generated document.
pub const TITLE: &str = "Segment Anything Model (SAM) - Project Documentation";

/// Intended readers, shown on the cover.
pub const AUDIENCE: &str = "Project Manager, Software Engineer";

/// Level-1 section headings, in document order.
pub const SECTION_HEADINGS: [&str; 11] = [
    "1. Executive Summary",
    "2. Scope & Objectives",
    "3. Architecture Overview",
    "4. Key Directories & Files",
    "5. Setup & Installation",
    "6. Usage - Python",
    "7. ONNX & Web Demo",
    "8. Data Flow",
    "9. Quality, Performance, and Risks",
    "10. Roadmap & Next Steps",
    "Appendix A: References",
];

/// Build the SAM project documentation.
pub fn sam_project_documentation(generated_at: NaiveDateTime) -> Document {
    let metadata = Metadata {
        title: Some(TITLE.to_string()),
        subject: Some("Segment Anything Model integration".to_string()),
        audience: Some(AUDIENCE.to_string()),
        generated_at: Some(generated_at),
    };
    let mut doc = DocumentBuilder::with_metadata(metadata);
    let quote = BlockStyle::IntenseQuote;

    // Cover
    doc.add_heading(TITLE, 0)
        .add_italic(format!(
            "Generated: {}",
            generated_at.format(TIMESTAMP_FORMAT)
        ))
        .add_italic(format!("Audience: {AUDIENCE}"));

    doc.add_heading(SECTION_HEADINGS[0], 1)
        .add_text(
            "This project integrates Meta AI's Segment Anything Model (SAM) to enable fast, flexible \
             image segmentation. It includes a Python backend library and a TypeScript demo UI for \
             interactive segmentation and ONNX inference.",
        )
        .add_bullets([
            "Outcome: Generate high-quality object masks from images with minimal prompts",
            "Deliverables: Python package, demo web app, example notebooks, output masks",
            "Stakeholders: PM, ML/Software Engineers",
            "Status: Ready for local runs and demonstrations",
        ]);

    doc.add_heading(SECTION_HEADINGS[1], 1).add_bullets([
        "Integrate SAM core components for promptable segmentation",
        "Provide automatic mask generation utility",
        "Export model to ONNX and demo browser inference",
        "Offer notebooks for common usage patterns",
    ]);

    doc.add_heading(SECTION_HEADINGS[2], 1)
        .add_text("High-level components:")
        .add_numbered([
            "Python package (`segment_anything/`): model, encoders, decoders, utilities",
            "Scripts (`scripts/`): automatic mask generator, ONNX export",
            "Notebooks (`notebooks/`): runnable examples",
            "Web demo (`segment-anything/demo/`): React + TypeScript UI",
            "Artifacts (`output_dir/`): generated masks and overlays",
        ]);

    doc.add_heading(SECTION_HEADINGS[3], 1).add_bullets([
        "segment_anything/modeling/sam.py: SAM model assembly",
        "segment_anything/predictor.py: High-level predictor API",
        "segment_anything/automatic_mask_generator.py: Batch/auto mask generation",
        "segment_anything/utils/onnx.py: ONNX export helpers",
        "scripts/amg.py: CLI for automatic mask generation",
        "scripts/export_onnx_model.py: Export to ONNX",
        "segment-anything/demo/src: Frontend demo application",
        "output_dir/mask/*.png: Generated masks",
        "output_dir/mask_overlay.png: Composite overlay",
    ]);

    doc.add_heading(SECTION_HEADINGS[4], 1)
        .add_text("Prerequisites:")
        .add_bullets([
            "Python 3.9+ with pip",
            "Node.js 16+ (for web demo)",
            "GPU optional; CPU works for demos (slower)",
        ])
        .add_text("Python package install:")
        .add_styled_block("pip install -e .", quote)
        .add_text(
            "Optional extras: PyTorch, onnxruntime, onnxruntime-gpu depending on environment.",
        );

    doc.add_heading(SECTION_HEADINGS[5], 1)
        .add_text(
            "Predictor example (points, boxes, masks): see `notebooks/predictor_example.ipynb`.",
        )
        .add_text("Automatic mask generation:")
        .add_styled_block(
            "python scripts/amg.py --input <image_or_folder> --output output_dir/",
            quote,
        );

    doc.add_heading(SECTION_HEADINGS[6], 1)
        .add_text("Export ONNX model:")
        .add_styled_block(
            "python scripts/export_onnx_model.py --checkpoint <path_to_ckpt> --output sam.onnx",
            quote,
        )
        .add_text("Run demo app:")
        .add_styled_block("cd segment-anything/demo && npm ci && npm run dev", quote);

    doc.add_heading(SECTION_HEADINGS[7], 1).add_bullets([
        "Input image loaded and preprocessed (transforms)",
        "Prompt encoding (points/boxes/masks)",
        "Image encoding via vision transformer",
        "Mask decoding conditioned on prompts",
        "Post-processing and thresholding to produce binary masks",
    ]);

    doc.add_heading(SECTION_HEADINGS[8], 1).add_bullets([
        "Deterministic inference given fixed prompts",
        "Performance depends on model size and hardware",
        "Memory use may be high for large images",
        "ONNX runtime on CPU may be slow; prefer GPU if available",
    ]);

    doc.add_heading(SECTION_HEADINGS[9], 1).add_bullets([
        "Add CLI for promptable single-image segmentation",
        "Dockerize demo and backend for easier deployment",
        "Provide evaluation scripts and metrics",
        "Integrate continuous testing and linting in CI",
    ]);

    doc.add_heading(SECTION_HEADINGS[10], 1).add_bullets([
        "README.md for overall guidance",
        "Notebooks for hands-on examples",
        "Demo `README.md` for web UI",
    ]);

    doc.build()
}
