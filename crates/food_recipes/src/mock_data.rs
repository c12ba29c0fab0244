use food_recipes_core::recipe::{Ingredient, Location, Recipe};

/// Generates demo recipes for local development. Every recipe is valid for
/// creation and already carries its id.
pub fn generate_demo_recipes() -> Vec<Recipe> {
    let mut recipes = vec![
        Recipe {
            title: "Chicken Pie".to_string(),
            cook_time: 90,
            difficulty: "moderate".to_string(),
            ingredients: vec![
                Ingredient::new("chicken thighs", 600).with_unit("g"),
                Ingredient::new("chicken stock", 300).with_unit("ml"),
                Ingredient::new("leeks", 2),
                Ingredient::new("puff pastry", 1),
            ],
            extra_ingredients: vec![Ingredient::new("thyme", 1).with_unit("tsp")],
            location: Location::in_cook_book("Family Favourites", 42),
            portion_size: 4,
            tags: Some(vec!["dinner".to_string(), "pie".to_string()]),
            ..Default::default()
        },
        Recipe {
            title: "Pancakes".to_string(),
            cook_time: 20,
            difficulty: "easy".to_string(),
            favourite: true,
            ingredients: vec![
                Ingredient::new("plain flour", 100).with_unit("g"),
                Ingredient::new("milk", 300).with_unit("ml"),
                Ingredient::new("eggs", 2),
            ],
            location: Location::at_link("https://www.bbcgoodfood.com/recipes/easy-pancakes"),
            notes: Some("Rest the batter for 30 minutes".to_string()),
            portion_size: 2,
            tags: Some(vec!["breakfast".to_string()]),
            ..Default::default()
        },
        Recipe {
            title: "Beef Wellington".to_string(),
            cook_time: 180,
            difficulty: "hard".to_string(),
            ingredients: vec![
                Ingredient::new("beef fillet", 1).with_unit("kg"),
                Ingredient::new("mushrooms", 500).with_unit("g"),
                Ingredient::new("parma ham", 8),
                Ingredient::new("puff pastry", 1),
            ],
            extra_ingredients: vec![Ingredient::new("english mustard", 2).with_unit("tbsp")],
            location: Location::in_cook_book("Sunday Roasts", 118),
            portion_size: 6,
            ..Default::default()
        },
    ];

    for recipe in &mut recipes {
        recipe.assign_id();
    }

    recipes
}
