//! Integration tests for the orchestration operations, run against a real
//! temporary database and a scripted generator.

mod common;

use common::FakeGenerator;

use larder_core::actions::{
    ActionError, generate_menu, generate_metrics, submit_family_profile, submit_leftovers,
    submit_product_categories, submit_receipt, submit_validated_products,
};
use larder_core::genai::ImageAttachment;
use larder_db::models::{
    MemberType, NewDietaryRestriction, NewFamilyMember, NewLeftover, NewProduct, Weekday,
};
use larder_db::queries::{
    family_members, leftovers, metrics, products, prohibited_dishes, recommendations, weekly_menu,
};
use larder_test_utils::{create_test_db, drop_test_db};

fn sample_profile() -> (Vec<NewFamilyMember>, Vec<NewDietaryRestriction>, Vec<String>) {
    let members = vec![NewFamilyMember {
        member_type: MemberType::Mother,
        count: 1,
    }];
    let restrictions = vec![NewDietaryRestriction {
        name: "Gluten".to_string(),
        is_active: true,
    }];
    let dishes = vec!["Sushi".to_string()];
    (members, restrictions, dishes)
}

// -----------------------------------------------------------------------
// Family profile
// -----------------------------------------------------------------------

#[tokio::test]
async fn family_profile_persists_all_three_collections_and_recommendations() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::with_replies([
        r#"{"recommendations":["Plan portions per person","Batch-cook grains"]}"#,
    ]);

    let (members, restrictions, dishes) = sample_profile();
    submit_family_profile(&pool, &generator, &members, &restrictions, &dishes)
        .await
        .expect("submit should succeed");

    let stored_members = family_members::get_all(&pool).await.unwrap();
    assert_eq!(stored_members.len(), 1);
    assert_eq!(stored_members[0].member_type, MemberType::Mother);

    let stored_restrictions = dietary_restrictions_all(&pool).await;
    assert_eq!(stored_restrictions, vec![("Gluten".to_string(), true)]);

    let stored_dishes = prohibited_dishes::get_all(&pool).await.unwrap();
    assert_eq!(stored_dishes.len(), 1);
    assert_eq!(stored_dishes[0].name, "Sushi");

    let recs = recommendations::get_all(&pool).await.unwrap();
    assert_eq!(recs.len(), 2);

    // The prompt carried the submitted data.
    let requests = generator.seen_requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].1.contains("Sushi"));

    drop_test_db(&db_name).await;
}

async fn dietary_restrictions_all(pool: &sqlx::PgPool) -> Vec<(String, bool)> {
    larder_db::queries::dietary_restrictions::get_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|r| (r.name, r.is_active))
        .collect()
}

#[tokio::test]
async fn family_profile_keeps_old_recommendations_when_model_yields_none() {
    let (pool, db_name) = create_test_db().await;

    recommendations::replace_all(&pool, &["Existing advice".to_string()])
        .await
        .unwrap();

    // A parsed-but-empty list must not clobber the stored set.
    let generator = FakeGenerator::with_replies([r#"{"recommendations":[]}"#]);
    let (members, restrictions, dishes) = sample_profile();
    submit_family_profile(&pool, &generator, &members, &restrictions, &dishes)
        .await
        .expect("submit should succeed");

    let recs = recommendations::get_all(&pool).await.unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].text, "Existing advice");

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn family_profile_succeeds_on_unparseable_recommendations() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::with_replies(["I would love to help but cannot."]);

    let (members, restrictions, dishes) = sample_profile();
    submit_family_profile(&pool, &generator, &members, &restrictions, &dishes)
        .await
        .expect("a fallback reply is not a failure");

    assert!(recommendations::get_all(&pool).await.unwrap().is_empty());

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn family_profile_surfaces_generation_transport_failure() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::failing("connection refused");

    let (members, restrictions, dishes) = sample_profile();
    let result = submit_family_profile(&pool, &generator, &members, &restrictions, &dishes).await;

    assert!(matches!(result, Err(ActionError::Other(_))));

    // The profile writes preceded the model call and stay in place; the
    // operation as a whole still reports failure.
    let stored_members = family_members::get_all(&pool).await.unwrap();
    assert_eq!(stored_members.len(), 1);

    drop_test_db(&db_name).await;
}

// -----------------------------------------------------------------------
// Receipt submission
// -----------------------------------------------------------------------

#[tokio::test]
async fn receipt_with_products_persists_and_returns_them() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::with_replies([
        r#"{"products":[{"name":"Milk","quantity_units":2,"unit_price":1.5,"total_price":3.0},{"name":"Apples","quantity_kg":1.2,"total_price":2.9}]}"#,
    ]);

    let image = ImageAttachment::from_base64("image/jpeg", "data:image/jpeg;base64,AAAA");
    let inserted = submit_receipt(&pool, &generator, image)
        .await
        .expect("extraction should succeed");

    assert_eq!(inserted.len(), 2);
    assert_eq!(inserted[0].name, "Milk");
    assert_eq!(inserted[1].quantity_kg, Some(1.2));

    let stored = products::get_all(&pool).await.unwrap();
    assert_eq!(stored.len(), 2);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn receipt_with_empty_extraction_fails_with_no_products_reason() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::with_replies([r#"{"products":[]}"#]);

    let image = ImageAttachment::from_base64("image/jpeg", "AAAA");
    let result = submit_receipt(&pool, &generator, image).await;

    let err = result.expect_err("empty extraction must fail");
    assert!(matches!(err, ActionError::NoProductsFound));
    assert_eq!(err.to_string(), "no products found in the receipt");

    assert!(products::get_all(&pool).await.unwrap().is_empty());

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn receipt_with_unparseable_reply_fails_distinctly() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::with_replies(["this is not a receipt"]);

    let image = ImageAttachment::from_base64("image/jpeg", "AAAA");
    let result = submit_receipt(&pool, &generator, image).await;

    assert!(matches!(result, Err(ActionError::UnusableModelResponse)));
    assert!(products::get_all(&pool).await.unwrap().is_empty());

    drop_test_db(&db_name).await;
}

// -----------------------------------------------------------------------
// Validated products / leftovers
// -----------------------------------------------------------------------

#[tokio::test]
async fn validated_products_append_without_generation() {
    let (pool, db_name) = create_test_db().await;

    let batch = vec![NewProduct {
        name: "Rice".to_string(),
        quantity_kg: Some(1.0),
        category: Some("Pantry".to_string()),
        ..Default::default()
    }];
    let inserted = submit_validated_products(&pool, &batch).await.unwrap();
    assert_eq!(inserted.len(), 1);

    // A second submission appends rather than replacing.
    submit_validated_products(&pool, &batch).await.unwrap();
    assert_eq!(products::get_all(&pool).await.unwrap().len(), 2);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn product_categories_append_with_category_set() {
    let (pool, db_name) = create_test_db().await;

    let batch = vec![
        NewProduct {
            name: "Milk".to_string(),
            category: Some("Dairy".to_string()),
            ..Default::default()
        },
        NewProduct {
            name: "Apples".to_string(),
            category: Some("Produce".to_string()),
            ..Default::default()
        },
    ];
    let inserted = submit_product_categories(&pool, &batch).await.unwrap();
    assert_eq!(inserted.len(), 2);
    assert_eq!(inserted[0].category.as_deref(), Some("Dairy"));

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn leftovers_append_and_refresh_recommendations() {
    let (pool, db_name) = create_test_db().await;
    let generator =
        FakeGenerator::with_replies([r#"{"recommendations":["Fried rice tomorrow"]}"#]);

    let entries = vec![NewLeftover {
        meal: "Sunday dinner".to_string(),
        product: "Rice".to_string(),
        quantity: "2 portions".to_string(),
    }];
    submit_leftovers(&pool, &generator, &entries).await.unwrap();

    assert_eq!(leftovers::get_all(&pool).await.unwrap().len(), 1);
    let recs = recommendations::get_all(&pool).await.unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].text, "Fried rice tomorrow");

    drop_test_db(&db_name).await;
}

// -----------------------------------------------------------------------
// Menu generation
// -----------------------------------------------------------------------

#[tokio::test]
async fn menu_generation_with_empty_inputs_completes_without_persisting() {
    let (pool, db_name) = create_test_db().await;
    // Unparseable reply: gateway degrades to an empty menu.
    let generator = FakeGenerator::with_replies(["no menu today"]);

    let menu = generate_menu(&pool, &generator)
        .await
        .expect("empty inputs and an empty menu are not failures");

    assert!(menu.is_empty());
    assert!(weekly_menu::get_all(&pool).await.unwrap().is_empty());

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn menu_generation_replaces_stored_menu_when_non_empty() {
    let (pool, db_name) = create_test_db().await;

    // A previous menu that must be fully superseded.
    weekly_menu::replace_all(
        &pool,
        &[larder_db::models::NewMenuEntry {
            day: Weekday::Fri,
            recipe: "Old pizza night".to_string(),
            protein: "Cheese".to_string(),
            side: "Dough".to_string(),
        }],
    )
    .await
    .unwrap();

    let generator = FakeGenerator::with_replies([
        r#"{"weeklyMenu":[
            {"day":"Mon","recipe":"Baked chicken","protein":"Chicken","side":"Mixed vegetables"},
            {"day":"Tue","recipe":"Pasta with meatballs","protein":"Beef","side":"Pasta"}
        ]}"#,
    ]);

    let menu = generate_menu(&pool, &generator).await.unwrap();
    assert_eq!(menu.len(), 2);

    let stored = weekly_menu::get_all(&pool).await.unwrap();
    assert_eq!(stored.len(), 2, "old menu must be gone");
    assert_eq!(stored[0].day, Weekday::Mon);
    assert_eq!(stored[1].recipe, "Pasta with meatballs");

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn menu_generation_reads_current_state_into_the_prompt() {
    let (pool, db_name) = create_test_db().await;

    let (members, restrictions, dishes) = sample_profile();
    family_members::replace_all(&pool, &members).await.unwrap();
    larder_db::queries::dietary_restrictions::replace_all(&pool, &restrictions)
        .await
        .unwrap();
    prohibited_dishes::replace_all(&pool, &dishes).await.unwrap();
    products::append(
        &pool,
        &[NewProduct {
            name: "Chicken breast".to_string(),
            quantity_kg: Some(0.8),
            ..Default::default()
        }],
    )
    .await
    .unwrap();

    let generator = FakeGenerator::with_replies([r#"{"weeklyMenu":[]}"#]);
    generate_menu(&pool, &generator).await.unwrap();

    let requests = generator.seen_requests();
    assert_eq!(requests.len(), 1);
    let prompt = &requests[0].1;
    assert!(prompt.contains("Chicken breast"));
    assert!(prompt.contains("Sushi"));
    assert!(prompt.contains("Gluten"));

    drop_test_db(&db_name).await;
}

// -----------------------------------------------------------------------
// Metrics generation
// -----------------------------------------------------------------------

#[tokio::test]
async fn metrics_persist_even_when_recommendations_are_empty() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::with_replies([
        r#"{"metrics":{"wastePercentage":12.5,"estimatedSavings":450.0,"weeklyWaste":[10,12,14,11,15]},"recommendations":[]}"#,
    ]);

    let outcome = generate_metrics(&pool, &generator).await.unwrap();
    assert_eq!(outcome.metrics.waste_percentage, 12.5);
    assert_eq!(outcome.metrics.weekly_waste.len(), 5);
    assert!(outcome.recommendations.is_empty());

    let stored = metrics::get_all(&pool).await.unwrap();
    assert_eq!(stored.len(), 1, "metric row saved independently");
    assert_eq!(stored[0].waste_percentage, 12.5);
    assert_eq!(stored[0].estimated_savings, 450.0);
    assert!(stored[0].week_number >= 1 && stored[0].week_number <= 53);

    assert!(recommendations::get_all(&pool).await.unwrap().is_empty());

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn metrics_and_recommendations_both_persist_when_present() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::with_replies([
        r#"{"metrics":{"wastePercentage":8.0,"estimatedSavings":200.0},"recommendations":["Shop with a list","Check the fridge first"]}"#,
    ]);

    let outcome = generate_metrics(&pool, &generator).await.unwrap();
    assert_eq!(outcome.recommendations.len(), 2);

    assert_eq!(metrics::get_all(&pool).await.unwrap().len(), 1);
    assert_eq!(recommendations::get_all(&pool).await.unwrap().len(), 2);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn metrics_fallback_persists_nothing_but_still_succeeds() {
    let (pool, db_name) = create_test_db().await;
    let generator = FakeGenerator::with_replies(["I have no idea"]);

    let outcome = generate_metrics(&pool, &generator)
        .await
        .expect("fallback is not a failure");

    assert_eq!(outcome.metrics.waste_percentage, 0.0);
    assert_eq!(outcome.metrics.estimated_savings, 0.0);
    assert!(outcome.recommendations.is_empty());

    assert!(metrics::get_all(&pool).await.unwrap().is_empty());
    assert!(recommendations::get_all(&pool).await.unwrap().is_empty());

    drop_test_db(&db_name).await;
}
