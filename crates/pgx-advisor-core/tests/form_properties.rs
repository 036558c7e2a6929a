//! Property tests for the resolver and form state.

use pgx_advisor_core::models::{Drug, Gene, Phenotype, RiskLevel};
use pgx_advisor_core::resolver::BRCA1_INFO;
use pgx_advisor_core::{resolve_advisory, FormState};
use proptest::prelude::*;

const ALL_PHENOTYPES: [Phenotype; 9] = [
    Phenotype::NormalMetabolizer,
    Phenotype::IntermediateMetabolizer,
    Phenotype::PoorMetabolizer,
    Phenotype::NormalActivity,
    Phenotype::IntermediateActivity,
    Phenotype::LowActivity,
    Phenotype::NormalFunction,
    Phenotype::IntermediateFunction,
    Phenotype::PoorFunction,
];

fn drug() -> impl Strategy<Value = Option<Drug>> {
    prop::option::of(prop::sample::select(Drug::ALL.to_vec()))
}

fn gene() -> impl Strategy<Value = Option<Gene>> {
    prop::option::of(prop::sample::select(Gene::ALL.to_vec()))
}

fn phenotype() -> impl Strategy<Value = Option<Phenotype>> {
    prop::option::of(prop::sample::select(ALL_PHENOTYPES.to_vec()))
}

proptest! {
    #[test]
    fn prop_advisory_iff_drug_selected(d in drug(), g in gene(), p in phenotype()) {
        let advisory = resolve_advisory(d, g, p);
        prop_assert_eq!(advisory.is_some(), d.is_some());
    }

    #[test]
    fn prop_brca1_is_fixed_info(d in prop::sample::select(Drug::ALL.to_vec()), p in phenotype()) {
        let advisory = resolve_advisory(Some(d), Some(Gene::Brca1), p).unwrap();
        prop_assert_eq!(advisory, BRCA1_INFO.to_advisory());
    }

    #[test]
    fn prop_alerts_need_matching_phenotype(d in drug(), g in gene(), p in phenotype()) {
        if let Some(advisory) = resolve_advisory(d, g, p) {
            if advisory.level != RiskLevel::Info {
                let p = p.unwrap();
                prop_assert_eq!(Some(p.gene()), g);
            }
        }
    }

    #[test]
    fn prop_capecitabine_matches_fluorouracil(g in gene(), p in phenotype()) {
        prop_assert_eq!(
            resolve_advisory(Some(Drug::Capecitabine), g, p),
            resolve_advisory(Some(Drug::Fluorouracil), g, p)
        );
    }

    #[test]
    fn prop_gene_change_resets_phenotype(
        first in prop::sample::select(vec![Gene::Cyp2c19, Gene::Tpmt, Gene::Dpyd]),
        index in 0usize..3,
        next in gene(),
    ) {
        let mut form = FormState::new();
        form.set_gene(Some(first));
        form.set_phenotype(Some(first.phenotypes()[index])).unwrap();
        prop_assert!(form.phenotype().is_some());

        form.set_gene(next);
        prop_assert_eq!(form.phenotype(), None);
    }

    #[test]
    fn prop_form_phenotype_always_matches_gene(
        steps in prop::collection::vec((gene(), phenotype()), 1..20),
    ) {
        let mut form = FormState::new();
        for (g, p) in steps {
            form.set_gene(g);
            let _ = form.set_phenotype(p);
            if let Some(p) = form.phenotype() {
                prop_assert_eq!(Some(p.gene()), form.gene());
            }
        }
    }
}
