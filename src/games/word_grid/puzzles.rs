//! Bundled crossword layouts.

use super::{WordGridPuzzle, WordPlacement};

pub(super) const PUZZLES: [WordGridPuzzle; 5] = [
    WordGridPuzzle::new(
        "Mind",
        [
            "BRAIN#MIND",
            "#E#S#F####",
            "MLEMORY###",
            "EA#A#C#R##",
            "DX#R#U#E##",
            "I##THS#S##",
            "THINK#STEM",
            "E#####Y###",
            "#ACTIVE###",
            "######M###",
        ],
        &[
            WordPlacement::across(1, "Organ in the head that controls the body", "BRAIN", 0, 0),
            WordPlacement::across(2, "Consciousness and thoughts", "MIND", 0, 6),
            WordPlacement::across(3, "The ability to recall information", "MEMORY", 2, 0),
            WordPlacement::across(4, "Process of using your brain", "THINK", 6, 1),
            WordPlacement::across(5, "Part of the nervous system (4 letters)", "STEM", 6, 6),
            WordPlacement::across(6, "Engaged in physical or mental activity", "ACTIVE", 8, 1),
            WordPlacement::down(7, "Practice to calm the mind", "MEDITATE", 0, 0),
            WordPlacement::down(8, "State of mental and physical rest", "RELAX", 0, 1),
            WordPlacement::down(9, "Related to intelligence or intellect", "SMART", 0, 3),
            WordPlacement::down(10, "Mental concentration", "FOCUS", 0, 5),
            WordPlacement::down(11, "Ability to recover or adapt", "RESYTEM", 0, 7),
        ],
    ),
    WordGridPuzzle::new(
        "Nature",
        [
            "TREE#SKY##",
            "#A##O#####",
            "FIELD#SUN#",
            "LN####T###",
            "O#RIVER###",
            "W#####S###",
            "EARTH##M##",
            "R######O##",
            "#CLOUDSON#",
            "#######N##",
        ],
        &[
            WordPlacement::across(1, "Tall plant with branches", "TREE", 0, 0),
            WordPlacement::across(2, "Blue above us", "SKY", 0, 6),
            WordPlacement::across(3, "Open grassland", "FIELD", 2, 0),
            WordPlacement::across(4, "Bright star at center of solar system", "SUN", 2, 6),
            WordPlacement::across(5, "Flowing water body", "RIVER", 4, 2),
            WordPlacement::across(6, "Our planet", "EARTH", 6, 0),
            WordPlacement::across(7, "White formations in the sky", "CLOUDS", 8, 1),
            WordPlacement::down(8, "Pretty garden plant", "FLOWER", 0, 0),
            WordPlacement::down(9, "Precipitation", "RAIN", 0, 1),
            WordPlacement::down(10, "Ocean", "OCEAN", 1, 4),
            WordPlacement::down(11, "Natural satellite", "STARS", 0, 6),
            WordPlacement::down(12, "Night light in sky", "MOON", 6, 7),
        ],
    ),
    WordGridPuzzle::new(
        "Animals",
        [
            "LION#BEAR#",
            "###O###P##",
            "TIGER#CAT#",
            "###L#D#N##",
            "WOLF#O#D##",
            "#W###G#A##",
            "FOX#OWL###",
            "#L########",
            "#FROG#####",
            "##########",
        ],
        &[
            WordPlacement::across(1, "King of the jungle", "LION", 0, 0),
            WordPlacement::across(2, "Large forest omnivore", "BEAR", 0, 5),
            WordPlacement::across(3, "Striped big cat", "TIGER", 2, 0),
            WordPlacement::across(4, "Common house pet", "CAT", 2, 6),
            WordPlacement::across(5, "Wild canine", "WOLF", 4, 0),
            WordPlacement::across(6, "Man's best friend", "DOG", 4, 5),
            WordPlacement::across(7, "Clever red mammal", "FOX", 6, 1),
            WordPlacement::across(8, "Night bird", "OWL", 6, 5),
            WordPlacement::across(9, "Black and white bear", "PANDA", 8, 1),
            WordPlacement::down(10, "Big cat family", "LION", 0, 0),
            WordPlacement::down(11, "Forest dweller", "TIGER", 0, 2),
            WordPlacement::down(12, "Barking pet", "DOG", 0, 7),
            WordPlacement::down(13, "Hunting animal", "WOLF", 0, 3),
            WordPlacement::down(14, "Bamboo eater", "PANDA", 4, 4),
        ],
    ),
    WordGridPuzzle::new(
        "Food",
        [
            "PIZZA#CAKE",
            "##########",
            "SUSHI#PIE#",
            "##########",
            "#SOUP#TEA#",
            "##########",
            "#RICE#####",
            "#E########",
            "#A########",
            "#D########",
        ],
        &[
            WordPlacement::across(1, "Italian dish with cheese and toppings", "PIZZA", 0, 0),
            WordPlacement::across(2, "Sweet baked dessert", "CAKE", 0, 6),
            WordPlacement::across(3, "Japanese raw fish dish", "SUSHI", 2, 0),
            WordPlacement::across(4, "Baked dessert with filling", "PIE", 2, 6),
            WordPlacement::across(5, "Liquid food in a bowl", "SOUP", 4, 1),
            WordPlacement::across(6, "Hot beverage", "TEA", 4, 6),
            WordPlacement::across(7, "White grain", "RICE", 6, 1),
            WordPlacement::down(8, "Round Italian food", "PIZZA", 0, 0),
            WordPlacement::down(9, "Morning food", "BREAD", 0, 1),
            WordPlacement::down(10, "Sweet treat", "CAKE", 0, 6),
            WordPlacement::down(11, "Hot drink", "TEA", 4, 6),
        ],
    ),
    WordGridPuzzle::new(
        "Sports",
        [
            "SOCCER#RUN",
            "W####A###E",
            "I#TENNIS#T",
            "M####G#K##",
            "#BALL##I##",
            "#####G####",
            "#JUMPO####",
            "#####L####",
            "#####F####",
            "##########",
        ],
        &[
            WordPlacement::across(1, "Popular ball sport played with feet", "SOCCER", 0, 0),
            WordPlacement::across(2, "Athletic movement on feet", "RUN", 0, 7),
            WordPlacement::across(3, "Racket sport", "TENNIS", 2, 0),
            WordPlacement::across(4, "Club and ball sport", "GOL", 2, 7),
            WordPlacement::across(5, "Winter slope sport", "SKI", 4, 1),
            WordPlacement::across(6, "Spherical sports equipment", "BALL", 4, 5),
            WordPlacement::across(7, "Water sport", "SWIM", 6, 1),
            WordPlacement::across(8, "Up and down movement", "JUMP", 8, 1),
            WordPlacement::down(9, "Team field sport", "SOCCER", 0, 0),
            WordPlacement::down(10, "Net sport", "TENNIS", 0, 2),
            WordPlacement::down(11, "Moving fast on feet", "RUN", 0, 7),
            WordPlacement::down(12, "Pool activity", "SWIM", 3, 1),
        ],
    ),
];
