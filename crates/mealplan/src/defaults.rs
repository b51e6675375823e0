//! Built-in fallback options for each meal category. Merged behind any
//! user-supplied custom lists, so generation works out of the box.

pub const BREAKFASTS: &[&str] = &[
    "Oatmeal with Berries",
    "Scrambled Eggs on Toast",
    "Greek Yogurt Parfait",
    "Banana Pancakes",
    "Avocado Toast",
    "Breakfast Burrito",
    "French Toast",
    "Smoothie Bowl",
    "Bagel with Cream Cheese",
    "Veggie Omelette",
];

pub const LUNCHES: &[&str] = &[
    "Caesar Salad",
    "Turkey Club Sandwich",
    "Tomato Soup with Grilled Cheese",
    "Chicken Wrap",
    "Quinoa Bowl",
    "BLT Sandwich",
    "Chicken Noodle Soup",
    "Caprese Panini",
    "Burrito Bowl",
    "Tuna Salad",
];

pub const DINNERS: &[&str] = &[
    "Spaghetti Bolognese",
    "Grilled Salmon",
    "Chicken Stir Fry",
    "Beef Tacos",
    "Margherita Pizza",
    "Roast Chicken",
    "Vegetable Curry",
    "Cheeseburgers",
    "Pad Thai",
    "Chili con Carne",
];
