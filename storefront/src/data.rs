//! Storefront catalog content.
//!
//! The catalog is published with the site: a curated list of products and
//! the two navigation menus (categories and conditions). Pages filter this
//! list client-side; there is no catalog backend.

use healthfield_commerce::prelude::*;

fn kes(major: i64) -> Money {
    Money::from_major(major, Currency::KES)
}

/// Shop-by-category menu entries.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("Medicine", "medicine")
            .with_description("Prescription and over-the-counter medicine")
            .with_position(0),
        Category::new("Vitamins & Supplements", "vitamins-supplements")
            .with_description("Daily vitamins, minerals and wellness support")
            .with_position(1),
        Category::new("Beauty, Care & Cosmetics", "beauty-care-cosmetics")
            .with_description("Skincare, body care and personal grooming")
            .with_position(2),
        Category::new("Tests & Equipment", "equipment")
            .with_description("Home test kits, monitors and medical equipment")
            .with_position(3),
    ]
}

/// Shop-by-condition menu entries.
pub fn conditions() -> Vec<Category> {
    vec![
        Category::condition("Heart & Blood Pressure", "heart").with_position(0),
        Category::condition("Diabetes Care", "diabetes").with_position(1),
        Category::condition("Women's Health", "women").with_position(2),
        Category::condition("Men's Health", "men").with_position(3),
    ]
}

/// The published product list.
pub fn products() -> Vec<Product> {
    vec![
        // Medicine
        Product::new(
            "fludex-c-10s",
            "Fludex-C Tablets 10s",
            "fludex-c-tablets-10s",
            kes(300),
            "medicine",
        )
        .with_description("Cold and flu relief medication for symptom management.")
        .with_image("/images/fludex-c-10s.jpg")
        .top_seller(),
        Product::new(
            "dulcolax-5mg-100s",
            "Dulcolax Tablets 5mg 100's",
            "dulcolax-tablets-5mg-100s",
            kes(300),
            "medicine",
        )
        .with_description("Medication used to relieve constipation effectively.")
        .with_image("/images/dulcolax-5mg-100s.jpg")
        .with_variation("5mg 100s")
        .top_seller(),
        Product::new(
            "panadol-extra-24s",
            "Panadol Extra Tablets 24s",
            "panadol-extra-tablets-24s",
            kes(250),
            "medicine",
        )
        .with_description("Fast pain relief with caffeine for added effect.")
        .with_image("/images/panadol-extra-24s.jpg"),
        Product::new(
            "amoxil-500mg-20s",
            "Amoxil Capsules 500mg 20s",
            "amoxil-capsules-500mg-20s",
            kes(850),
            "medicine",
        )
        .with_description("Broad-spectrum antibiotic. Dispensed against a valid prescription.")
        .with_image("/images/amoxil-500mg-20s.jpg")
        .with_variation("500mg 20s")
        .prescription_only(),
        Product::new(
            "metformin-500mg-56s",
            "Metformin Tablets 500mg 56s",
            "metformin-tablets-500mg-56s",
            kes(450),
            "medicine",
        )
        .with_description("First-line therapy for type 2 diabetes.")
        .with_image("/images/metformin-500mg-56s.jpg")
        .with_variation("500mg 56s")
        .prescription_only()
        .with_tag("diabetes"),
        Product::new(
            "amlodipine-5mg-30s",
            "Amlodipine Tablets 5mg 30s",
            "amlodipine-tablets-5mg-30s",
            kes(400),
            "medicine",
        )
        .with_description("Calcium channel blocker for high blood pressure.")
        .with_image("/images/amlodipine-5mg-30s.jpg")
        .with_variation("5mg 30s")
        .prescription_only()
        .with_tag("heart"),
        Product::new(
            "aspirin-cardio-100mg",
            "Aspirin Cardio 100mg 30s",
            "aspirin-cardio-100mg-30s",
            kes(350),
            "medicine",
        )
        .with_description("Low-dose aspirin for cardiovascular protection.")
        .with_image("/images/aspirin-cardio-100mg.jpg")
        .with_compare_at_price(kes(450))
        .with_tag("heart"),
        // Vitamins & supplements
        Product::new(
            "vitamin-c-1000mg",
            "Vitamin C 1000mg Effervescent 20s",
            "vitamin-c-1000mg-effervescent",
            kes(750),
            "vitamins-supplements",
        )
        .with_description("Immune support in a fast-dissolving orange flavour.")
        .with_image("/images/vitamin-c-1000mg.jpg")
        .with_compare_at_price(kes(950)),
        Product::new(
            "folic-acid-5mg-30s",
            "Folic Acid Tablets 5mg 30s",
            "folic-acid-tablets-5mg-30s",
            kes(200),
            "vitamins-supplements",
        )
        .with_description("Essential before and during pregnancy.")
        .with_image("/images/folic-acid-5mg-30s.jpg")
        .with_tag("women"),
        Product::new(
            "omega-3-1000mg-60s",
            "Omega-3 Fish Oil 1000mg 60s",
            "omega-3-fish-oil-1000mg-60s",
            kes(1200),
            "vitamins-supplements",
        )
        .with_description("Heart and brain support from purified fish oil.")
        .with_image("/images/omega-3-1000mg-60s.jpg")
        .with_tag("heart"),
        Product::new(
            "wellman-original-30s",
            "Wellman Original Tablets 30s",
            "wellman-original-tablets-30s",
            kes(1800),
            "vitamins-supplements",
        )
        .with_description("Daily micronutrient support formulated for men.")
        .with_image("/images/wellman-original-30s.jpg")
        .with_tag("men"),
        Product::new(
            "pregnacare-original-30s",
            "Pregnacare Original Tablets 30s",
            "pregnacare-original-tablets-30s",
            kes(1500),
            "vitamins-supplements",
        )
        .with_description("Pregnancy multivitamin with folic acid and iron.")
        .with_image("/images/pregnacare-original-30s.jpg")
        .with_tag("women"),
        // Beauty, care & cosmetics
        Product::new(
            "cetaphil-cleanser-250ml",
            "Cetaphil Gentle Skin Cleanser 250ml",
            "cetaphil-gentle-skin-cleanser-250ml",
            kes(1950),
            "beauty-care-cosmetics",
        )
        .with_description("Soap-free cleanser for sensitive and dry skin.")
        .with_image("/images/cetaphil-cleanser-250ml.jpg"),
        Product::new(
            "nivea-lotion-400ml",
            "Nivea Nourishing Body Lotion 400ml",
            "nivea-nourishing-body-lotion-400ml",
            kes(800),
            "beauty-care-cosmetics",
        )
        .with_description("Deep moisture for dry skin, 48h care.")
        .with_image("/images/nivea-lotion-400ml.jpg")
        .with_compare_at_price(kes(1000)),
        Product::new(
            "sunscreen-spf50-100ml",
            "Dermacare Sunscreen SPF50 100ml",
            "dermacare-sunscreen-spf50-100ml",
            kes(1400),
            "beauty-care-cosmetics",
        )
        .with_description("Broad-spectrum protection, non-greasy finish.")
        .with_image("/images/sunscreen-spf50-100ml.jpg"),
        // Tests & equipment
        Product::new(
            "swift-hiv-kit",
            "Swift Hiv Kit Cassette",
            "swift-hiv-kit-cassette",
            kes(300),
            "equipment",
        )
        .with_description("Used to detect the presence of HIV antibodies.")
        .with_image("/images/swift-hiv-kit.jpg")
        .top_seller(),
        Product::new(
            "swift-pregnancy-cassette",
            "Swift Pregnancy Kit Cassette",
            "swift-pregnancy-kit-cassette",
            kes(300),
            "equipment",
        )
        .with_description("Diagnostic kit for detecting human chorionic gonadotropin.")
        .with_image("/images/swift-pregnancy-cassette.jpg")
        .top_seller()
        .with_tag("women"),
        Product::new(
            "swift-pregnancy-midstream",
            "Swift Pregnancy Kit Midstream",
            "swift-pregnancy-kit-midstream",
            kes(350),
            "equipment",
        )
        .with_description("Quick and easy test for early pregnancy detection.")
        .with_image("/images/swift-pregnancy-midstream.jpg")
        .top_seller()
        .with_tag("women"),
        Product::new(
            "durex-fetherlite-3s",
            "Durex Fetherlite 3s",
            "durex-fetherlite-3s",
            kes(650),
            "equipment",
        )
        .with_description("Ultra-thin condoms designed for enhanced sensitivity.")
        .with_image("/images/durex-fetherlite-3s.jpg")
        .top_seller()
        .with_tag("men"),
        Product::new(
            "accu-chek-strips-50s",
            "Accu-Chek Active Test Strips 50s",
            "accu-chek-active-test-strips-50s",
            kes(2600),
            "equipment",
        )
        .with_description("Blood glucose test strips for Accu-Chek Active meters.")
        .with_image("/images/accu-chek-strips-50s.jpg")
        .with_tag("diabetes"),
        Product::new(
            "omron-m2-monitor",
            "Omron M2 Blood Pressure Monitor",
            "omron-m2-blood-pressure-monitor",
            kes(4500),
            "equipment",
        )
        .with_description("Clinically validated upper-arm monitor for home use.")
        .with_image("/images/omron-m2-monitor.jpg")
        .with_compare_at_price(kes(5200))
        .with_tag("heart"),
        Product::new(
            "digital-thermometer",
            "Digital Thermometer",
            "digital-thermometer",
            kes(550),
            "equipment",
        )
        .with_description("Fast-read flexible tip thermometer.")
        .with_image("/images/digital-thermometer.jpg")
        .out_of_stock(),
    ]
}

/// Look up a product by id.
pub fn product(id: &ProductId) -> Option<Product> {
    products().into_iter().find(|p| &p.id == id)
}

/// Look up a shop-by-category entry by slug.
pub fn category_by_slug(slug: &str) -> Option<Category> {
    categories().into_iter().find(|c| c.slug == slug)
}

/// Look up a condition entry by slug.
pub fn condition_by_slug(slug: &str) -> Option<Category> {
    conditions().into_iter().find(|c| c.slug == slug)
}

/// Display name for a category id, for cart labels.
pub fn category_name(id: &CategoryId) -> Option<String> {
    categories().into_iter().find(|c| &c.id == id).map(|c| c.name)
}

/// Products filed under a category.
pub fn products_in_category(id: &CategoryId) -> Vec<Product> {
    products()
        .into_iter()
        .filter(|p| &p.category_id == id)
        .collect()
}

/// Products relevant to a condition (matched by tag).
pub fn products_for_condition(slug: &str) -> Vec<Product> {
    products()
        .into_iter()
        .filter(|p| p.tags.iter().any(|t| t == slug))
        .collect()
}

/// Best-sellers rail.
pub fn top_sellers() -> Vec<Product> {
    products().into_iter().filter(|p| p.top_seller).collect()
}

/// Products currently marked down.
pub fn on_offer() -> Vec<Product> {
    products().into_iter().filter(|p| p.is_on_sale()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_unique() {
        let all = products();
        let ids: HashSet<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_every_product_has_a_known_category() {
        let known: HashSet<String> = categories()
            .into_iter()
            .map(|c| c.id.into_inner())
            .collect();
        for product in products() {
            assert!(
                known.contains(product.category_id.as_str()),
                "unknown category for {}",
                product.id
            );
        }
    }

    #[test]
    fn test_every_condition_has_products() {
        for condition in conditions() {
            assert!(
                !products_for_condition(&condition.slug).is_empty(),
                "no products for condition {}",
                condition.slug
            );
        }
    }

    #[test]
    fn test_top_sellers_and_offers_non_empty() {
        assert!(!top_sellers().is_empty());
        assert!(!on_offer().is_empty());
    }
}
