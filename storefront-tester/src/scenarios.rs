//! Logic scenarios exercised against the storefront core.
use anyhow::{Result, bail, ensure};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use storefront_core::{
    ALL_CATEGORIES_LABEL, Catalog, CategorySelection, ProductId, SessionSnapshot,
    StorefrontSession,
};

/// Highest id drawn for random carts; ids above the catalog's range exercise
/// the unknown-product paths.
const MAX_RANDOM_ID: u32 = 9;
const RANDOM_WALK_STEPS: usize = 60;

/// A scenario check returns the final state of the session it drove.
pub type ScenarioCheck = fn(&Catalog, &mut ChaCha8Rng) -> Result<SessionSnapshot>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub check: ScenarioCheck,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "smoke",
        description: "Seed catalog loads and a fresh session is empty on the all filter",
        check: smoke,
    },
    Scenario {
        key: "cart-growth",
        description: "Cart length equals the number of add calls",
        check: cart_growth,
    },
    Scenario {
        key: "remove-all",
        description: "Removing an id drops every occurrence and nothing else",
        check: remove_all,
    },
    Scenario {
        key: "totals",
        description: "Cart totals sum catalog prices and ignore unknown ids",
        check: totals,
    },
    Scenario {
        key: "category-filter",
        description: "Each category shows exactly its products in catalog order",
        check: category_filter,
    },
    Scenario {
        key: "random-walk",
        description: "Interleaved operations agree with a reference model",
        check: random_walk,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description))
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    SCENARIOS.iter().copied().find(|s| s.key == key)
}

/// Expand `all` into every scenario key, keeping any other names in order.
pub fn expand_scenarios(requested: Vec<String>) -> Vec<String> {
    if !requested.iter().any(|s| s == "all") {
        return requested;
    }
    let mut scenarios: Vec<String> = requested.into_iter().filter(|s| s != "all").collect();
    scenarios.extend(SCENARIOS.iter().map(|s| s.key.to_string()));
    scenarios
}

fn random_id(rng: &mut ChaCha8Rng) -> ProductId {
    ProductId::new(rng.gen_range(1..=MAX_RANDOM_ID))
}

fn reference_total(catalog: &Catalog, ids: &[ProductId]) -> u64 {
    ids.iter()
        .filter_map(|id| catalog.products().iter().find(|p| p.id == *id))
        .map(|p| u64::from(p.price.amount()))
        .sum()
}

fn smoke(catalog: &Catalog, _rng: &mut ChaCha8Rng) -> Result<SessionSnapshot> {
    ensure!(catalog.len() == 6, "expected 6 products, found {}", catalog.len());
    let session = StorefrontSession::new(catalog);
    ensure!(session.selection().is_all(), "default selection should be all");
    ensure!(session.cart().is_empty(), "cart should start empty");
    ensure!(
        session.visible_products().len() == catalog.len(),
        "all filter should show the full catalog"
    );
    ensure!(session.total_price() == 0, "empty cart should total 0");
    Ok(session.snapshot())
}

fn cart_growth(catalog: &Catalog, rng: &mut ChaCha8Rng) -> Result<SessionSnapshot> {
    let mut session = StorefrontSession::new(catalog);
    let adds = rng.gen_range(0..40);
    for call in 1..=adds {
        session.add_to_cart(random_id(rng));
        ensure!(
            session.cart_count() == call,
            "after {call} adds cart holds {} entries",
            session.cart_count()
        );
    }
    Ok(session.snapshot())
}

fn remove_all(catalog: &Catalog, rng: &mut ChaCha8Rng) -> Result<SessionSnapshot> {
    let mut session = StorefrontSession::new(catalog);
    for _ in 0..rng.gen_range(0..25) {
        session.add_to_cart(random_id(rng));
    }
    let target = if rng.gen_bool(0.8) {
        session
            .cart()
            .entries()
            .choose(rng)
            .copied()
            .unwrap_or_else(|| random_id(rng))
    } else {
        random_id(rng)
    };

    let before: Vec<ProductId> = session.cart().entries().to_vec();
    let k = session.cart().count_of(target);
    let removed = session.remove_from_cart(target);

    ensure!(removed == k, "removed {removed} entries of {target}, expected {k}");
    ensure!(
        session.cart().count_of(target) == 0,
        "{target} still present after removal"
    );
    ensure!(
        session.cart_count() == before.len() - k,
        "cart shrank by {} instead of {k}",
        before.len() - session.cart_count()
    );
    let survivors: Vec<ProductId> = before.into_iter().filter(|id| *id != target).collect();
    ensure!(
        session.cart().entries() == survivors.as_slice(),
        "removal reordered the remaining entries"
    );
    Ok(session.snapshot())
}

fn totals(catalog: &Catalog, rng: &mut ChaCha8Rng) -> Result<SessionSnapshot> {
    let mut session = StorefrontSession::new(catalog);
    ensure!(session.total_price() == 0, "empty cart should total 0");

    for raw in [1, 2, 3] {
        session.add_to_cart(ProductId::new(raw));
    }
    ensure!(
        session.total_price() == 497,
        "ids 1,2,3 total {} instead of 497",
        session.total_price()
    );

    let mut random = StorefrontSession::new(catalog);
    for _ in 0..rng.gen_range(0..30) {
        random.add_to_cart(random_id(rng));
    }
    let expected = reference_total(catalog, random.cart().entries());
    ensure!(
        random.total_price() == expected,
        "random cart totals {} instead of {expected}",
        random.total_price()
    );
    Ok(session.snapshot())
}

fn category_filter(catalog: &Catalog, rng: &mut ChaCha8Rng) -> Result<SessionSnapshot> {
    let mut session = StorefrontSession::new(catalog);
    let mut options = session.categories();
    ensure!(
        options.first() == Some(&CategorySelection::All),
        "category list must start with the all sentinel"
    );
    options.shuffle(rng);

    for option in options {
        session.set_category(option.label());
        let visible = session.visible_products();
        match &option {
            CategorySelection::All => ensure!(
                visible.len() == catalog.len(),
                "all filter shows {} products",
                visible.len()
            ),
            CategorySelection::Named(label) => {
                let expected: Vec<ProductId> = catalog
                    .products()
                    .iter()
                    .filter(|p| p.category == *label)
                    .map(|p| p.id)
                    .collect();
                let actual: Vec<ProductId> = visible.iter().map(|p| p.id).collect();
                ensure!(!actual.is_empty(), "category '{label}' shows nothing");
                ensure!(
                    actual == expected,
                    "category '{label}' shows {actual:?}, expected {expected:?}"
                );
            }
        }
    }

    let unknown = format!("فئة-{}", rng.gen_range(1000..9999));
    session.set_category(&unknown);
    ensure!(
        session.visible_products().is_empty(),
        "unknown category '{unknown}' should show nothing"
    );
    Ok(session.snapshot())
}

#[derive(Default)]
struct ReferenceModel {
    cart: Vec<ProductId>,
    selection: String,
}

fn random_walk(catalog: &Catalog, rng: &mut ChaCha8Rng) -> Result<SessionSnapshot> {
    let mut session = StorefrontSession::new(catalog);
    let mut model = ReferenceModel {
        selection: ALL_CATEGORIES_LABEL.to_string(),
        ..ReferenceModel::default()
    };
    let mut labels: Vec<String> = session
        .categories()
        .into_iter()
        .map(String::from)
        .collect();
    labels.push("غير موجود".to_string());

    for step in 0..RANDOM_WALK_STEPS {
        match rng.gen_range(0..3) {
            0 => {
                let id = random_id(rng);
                session.add_to_cart(id);
                model.cart.push(id);
            }
            1 => {
                let id = random_id(rng);
                session.remove_from_cart(id);
                model.cart.retain(|entry| *entry != id);
            }
            2 => {
                let Some(label) = labels.choose(rng) else {
                    bail!("no category labels to choose from");
                };
                session.set_category(label);
                model.selection.clone_from(label);
            }
            _ => unreachable!("gen_range(0..3) yields 0, 1 or 2"),
        }

        ensure!(
            session.cart().entries() == model.cart.as_slice(),
            "step {step}: cart diverged from model"
        );
        ensure!(
            session.selection().label() == model.selection,
            "step {step}: selection '{}' != model '{}'",
            session.selection(),
            model.selection
        );
        ensure!(
            session.total_price() == reference_total(catalog, &model.cart),
            "step {step}: total diverged from model"
        );
        let expected_visible = catalog
            .products()
            .iter()
            .filter(|p| model.selection == ALL_CATEGORIES_LABEL || p.category == model.selection)
            .count();
        ensure!(
            session.visible_products().len() == expected_visible,
            "step {step}: visible count diverged from model"
        );
    }
    Ok(session.snapshot())
}
