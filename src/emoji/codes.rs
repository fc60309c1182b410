//! Emoji shortcode names and the image file names Mattermost serves them as.

/// `(name, code)` pairs. Codes are lowercase hex code points joined with `-`;
/// emoji that exist only in Mattermost use their own name.
pub(super) const EMOJI_CODES: &[(&str, &str)] = &[
    ("+1", "1f44d"),
    ("-1", "1f44e"),
    ("100", "1f4af"),
    ("1st_place_medal", "1f947"),
    ("2nd_place_medal", "1f948"),
    ("3rd_place_medal", "1f949"),
    ("a_button_blood_type", "1f170"),
    ("ab_button_blood_type", "1f18e"),
    ("abacus", "1f9ee"),
    ("accordion", "1fa97"),
    ("adhesive_bandage", "1fa79"),
    ("admission_tickets", "1f39f"),
    ("adult", "1f9d1"),
    ("aerial_tramway", "1f6a1"),
    ("airplane", "2708"),
    ("airplane_arrival", "1f6ec"),
    ("airplane_arriving", "1f6ec"),
    ("airplane_departure", "1f6eb"),
    ("alarm_clock", "23f0"),
    ("alembic", "2697"),
    ("alien", "1f47d"),
    ("alien_monster", "1f47e"),
    ("ambulance", "1f691"),
    ("american_football", "1f3c8"),
    ("amphora", "1f3fa"),
    ("anatomical_heart", "1fac0"),
    ("anchor", "2693"),
    ("anger", "1f4a2"),
    ("anger_symbol", "1f4a2"),
    ("angry", "1f620"),
    ("angry_face", "1f620"),
    ("angry_face_with_horns", "1f47f"),
    ("anguished", "1f627"),
    ("anguished_face", "1f627"),
    ("ant", "1f41c"),
    ("antenna_bars", "1f4f6"),
    ("antenna_with_bars", "1f4f6"),
    ("anticlockwise_downwards_and_upwards_open_circle_arrows", "1f504"),
    ("anxious_face_with_sweat", "1f630"),
    ("apple", "1f34e"),
    ("aquarius", "2652"),
    ("aries", "2648"),
    ("arrow_down", "2b07"),
    ("arrow_left", "2b05"),
    ("arrow_pointing_rightwards_then_curving_downwards", "2935"),
    ("arrow_pointing_rightwards_then_curving_upwards", "2934"),
    ("arrow_right", "27a1"),
    ("arrow_up", "2b06"),
    ("articulated_lorry", "1f69b"),
    ("artist", "1f9d1-200d-1f3a8"),
    ("artist_palette", "1f3a8"),
    ("astonished", "1f632"),
    ("astonished_face", "1f632"),
    ("astronaut", "1f9d1-200d-1f680"),
    ("athletic_shoe", "1f45f"),
    ("atm_sign", "1f3e7"),
    ("atom_symbol", "269b"),
    ("aubergine", "1f346"),
    ("auto_rickshaw", "1f6fa"),
    ("automated_teller_machine", "1f3e7"),
    ("automobile", "1f697"),
    ("avocado", "1f951"),
    ("axe", "1fa93"),
    ("b_button_blood_type", "1f171"),
    ("baby", "1f476"),
    ("baby_angel", "1f47c"),
    ("baby_bottle", "1f37c"),
    ("baby_chick", "1f424"),
    ("baby_symbol", "1f6bc"),
    ("back_arrow", "1f519"),
    ("back_with_leftwards_arrow_above", "1f519"),
    ("backhand_index_pointing_down", "1f447"),
    ("backhand_index_pointing_left", "1f448"),
    ("backhand_index_pointing_right", "1f449"),
    ("backhand_index_pointing_up", "1f446"),
    ("backpack", "1f392"),
    ("bacon", "1f953"),
    ("bactrian_camel", "1f42b"),
    ("badger", "1f9a1"),
    ("badminton", "1f3f8"),
    ("badminton_racquet_and_shuttlecock", "1f3f8"),
    ("bagel", "1f96f"),
    ("baggage_claim", "1f6c4"),
    ("baguette_bread", "1f956"),
    ("balance_scale", "2696"),
    ("ball_of_yarn", "1f9f6"),
    ("ballet_dancer", "1f9d1-200d-1fa70"),
    ("ballet_shoes", "1fa70"),
    ("balloon", "1f388"),
    ("ballot_box_with_ballot", "1f5f3"),
    ("ballot_box_with_check", "2611"),
    ("banana", "1f34c"),
    ("bangbang", "203c"),
    ("banjo", "1fa95"),
    ("bank", "1f3e6"),
    ("banknote_with_dollar_sign", "1f4b5"),
    ("banknote_with_euro_sign", "1f4b6"),
    ("banknote_with_pound_sign", "1f4b7"),
    ("banknote_with_yen_sign", "1f4b4"),
    ("bar_chart", "1f4ca"),
    ("bar_of_soap", "1f9fc"),
    ("barber_pole", "1f488"),
    ("baseball", "26be"),
    ("basket", "1f9fa"),
    ("basketball", "1f3c0"),
    ("basketball_and_hoop", "1f3c0"),
    ("bat", "1f987"),
    ("bath", "1f6c0"),
    ("bathtub", "1f6c1"),
    ("battery", "1f50b"),
    ("beach_with_umbrella", "1f3d6"),
    ("beaming_face_with_smiling_eyes", "1f601"),
    ("beans", "1fad8"),
    ("bear", "1f43b"),
    ("bear_face", "1f43b"),
    ("bearded_person", "1f9d4"),
    ("beating_heart", "1f493"),
    ("beaver", "1f9ab"),
    ("bed", "1f6cf"),
    ("bee", "1f41d"),
    ("beer", "1f37a"),
    ("beer_mug", "1f37a"),
    ("beers", "1f37b"),
    ("beetle", "1fab2"),
    ("bell", "1f514"),
    ("bell_pepper", "1fad1"),
    ("bell_with_cancellation_stroke", "1f515"),
    ("bell_with_slash", "1f515"),
    ("bellhop_bell", "1f6ce"),
    ("bento_box", "1f371"),
    ("beverage_box", "1f9c3"),
    ("bicycle", "1f6b2"),
    ("bicyclist", "1f6b4"),
    ("bike", "1f6b2"),
    ("bikini", "1f459"),
    ("billed_cap", "1f9e2"),
    ("billiards", "1f3b1"),
    ("biohazard", "2623"),
    ("biohazard_sign", "2623"),
    ("bird", "1f426"),
    ("birthday", "1f382"),
    ("birthday_cake", "1f382"),
    ("bison", "1f9ac"),
    ("biting_lip", "1fae6"),
    ("black_bird", "1f426-200d-2b1b"),
    ("black_cat", "1f408-200d-2b1b"),
    ("black_chess_pawn", "265f"),
    ("black_circle", "26ab"),
    ("black_circle_for_record", "23fa"),
    ("black_club_suit", "2663"),
    ("black_diamond_suit", "2666"),
    ("black_down-pointing_double_triangle", "23ec"),
    ("black_flag", "1f3f4"),
    ("black_heart", "1f5a4"),
    ("black_heart_suit", "2665"),
    ("black_large_square", "2b1b"),
    ("black_left-pointing_double_triangle", "23ea"),
    ("black_left-pointing_double_triangle_with_vertical_bar", "23ee"),
    ("black_left-pointing_triangle", "25c0"),
    ("black_medium-small_square", "25fe"),
    ("black_medium_small_square", "25fe"),
    ("black_medium_square", "25fc"),
    ("black_nib", "2712"),
    ("black_question_mark_ornament", "2753"),
    ("black_right-pointing_double_triangle", "23e9"),
    ("black_right-pointing_double_triangle_with_vertical_bar", "23ed"),
    ("black_right-pointing_triangle", "25b6"),
    ("black_right-pointing_triangle_with_double_vertical_bar", "23ef"),
    ("black_rightwards_arrow", "27a1"),
    ("black_scissors", "2702"),
    ("black_small_square", "25aa"),
    ("black_spade_suit", "2660"),
    ("black_square_button", "1f532"),
    ("black_square_for_stop", "23f9"),
    ("black_sun_with_rays", "2600"),
    ("black_telephone", "260e"),
    ("black_universal_recycling_symbol", "267b"),
    ("black_up-pointing_double_triangle", "23eb"),
    ("blossom", "1f33c"),
    ("blowfish", "1f421"),
    ("blue_book", "1f4d8"),
    ("blue_circle", "1f535"),
    ("blue_heart", "1f499"),
    ("blue_square", "1f7e6"),
    ("blueberries", "1fad0"),
    ("blush", "1f60a"),
    ("boar", "1f417"),
    ("bomb", "1f4a3"),
    ("bone", "1f9b4"),
    ("bookmark", "1f516"),
    ("bookmark_tabs", "1f4d1"),
    ("books", "1f4da"),
    ("boom", "1f4a5"),
    ("boomerang", "1fa83"),
    ("bottle_with_popping_cork", "1f37e"),
    ("bouquet", "1f490"),
    ("bow_and_arrow", "1f3f9"),
    ("bowl_with_spoon", "1f963"),
    ("bowling", "1f3b3"),
    ("boxing_glove", "1f94a"),
    ("boy", "1f466"),
    ("brain", "1f9e0"),
    ("bread", "1f35e"),
    ("breast-feeding", "1f931"),
    ("brick", "1f9f1"),
    ("bride_with_veil", "1f470"),
    ("bridge_at_night", "1f309"),
    ("briefcase", "1f4bc"),
    ("briefs", "1fa72"),
    ("bright_button", "1f506"),
    ("broccoli", "1f966"),
    ("broken_chain", "26d3-200d-1f4a5"),
    ("broken_heart", "1f494"),
    ("broom", "1f9f9"),
    ("brown_circle", "1f7e4"),
    ("brown_heart", "1f90e"),
    ("brown_mushroom", "1f344-200d-1f7eb"),
    ("brown_square", "1f7eb"),
    ("bubble_tea", "1f9cb"),
    ("bubbles", "1fae7"),
    ("bucket", "1faa3"),
    ("bug", "1f41b"),
    ("building_construction", "1f3d7"),
    ("bulb", "1f4a1"),
    ("bullet_train", "1f685"),
    ("bullseye", "1f3af"),
    ("burrito", "1f32f"),
    ("bus", "1f68c"),
    ("bus_stop", "1f68f"),
    ("bust_in_silhouette", "1f464"),
    ("busts_in_silhouette", "1f465"),
    ("butter", "1f9c8"),
    ("butterfly", "1f98b"),
    ("cactus", "1f335"),
    ("cake", "1f370"),
    ("calendar", "1f4c6"),
    ("call_me_hand", "1f919"),
    ("camel", "1f42a"),
    ("camera", "1f4f7"),
    ("camera_with_flash", "1f4f8"),
    ("camping", "1f3d5"),
    ("cancer", "264b"),
    ("candle", "1f56f"),
    ("candy", "1f36c"),
    ("canned_food", "1f96b"),
    ("canoe", "1f6f6"),
    ("capricorn", "2651"),
    ("car", "1f697"),
    ("card_file_box", "1f5c3"),
    ("card_index", "1f4c7"),
    ("card_index_dividers", "1f5c2"),
    ("carousel_horse", "1f3a0"),
    ("carp_streamer", "1f38f"),
    ("carpentry_saw", "1fa9a"),
    ("carrot", "1f955"),
    ("castle", "1f3f0"),
    ("cat", "1f431"),
    ("cat_face", "1f431"),
    ("cat_face_with_tears_of_joy", "1f639"),
    ("cat_face_with_wry_smile", "1f63c"),
    ("cat_with_tears_of_joy", "1f639"),
    ("cat_with_wry_smile", "1f63c"),
    ("chains", "26d3"),
    ("chair", "1fa91"),
    ("chart_decreasing", "1f4c9"),
    ("chart_increasing", "1f4c8"),
    ("chart_increasing_with_yen", "1f4b9"),
    ("chart_with_downwards_trend", "1f4c9"),
    ("chart_with_upwards_trend", "1f4c8"),
    ("chart_with_upwards_trend_and_yen_sign", "1f4b9"),
    ("check_box_with_check", "2611"),
    ("check_mark", "2714"),
    ("check_mark_button", "2705"),
    ("checkered_flag", "1f3c1"),
    ("cheering_megaphone", "1f4e3"),
    ("cheese_wedge", "1f9c0"),
    ("chequered_flag", "1f3c1"),
    ("cherries", "1f352"),
    ("cherry_blossom", "1f338"),
    ("chess_pawn", "265f"),
    ("chestnut", "1f330"),
    ("chicken", "1f414"),
    ("child", "1f9d2"),
    ("children_crossing", "1f6b8"),
    ("chipmunk", "1f43f"),
    ("chocolate_bar", "1f36b"),
    ("chopsticks", "1f962"),
    ("christmas_tree", "1f384"),
    ("church", "26ea"),
    ("cigarette", "1f6ac"),
    ("cinema", "1f3a6"),
    ("circled_ideograph_accept", "1f251"),
    ("circled_ideograph_advantage", "1f250"),
    ("circled_ideograph_congratulation", "3297"),
    ("circled_ideograph_secret", "3299"),
    ("circled_latin_capital_letter_m", "24c2"),
    ("circled_m", "24c2"),
    ("circus_tent", "1f3aa"),
    ("cityscape", "1f3d9"),
    ("cityscape_at_dusk", "1f306"),
    ("cl_button", "1f191"),
    ("clamp", "1f5dc"),
    ("clap", "1f44f"),
    ("clapper_board", "1f3ac"),
    ("clapping_hands", "1f44f"),
    ("clapping_hands_sign", "1f44f"),
    ("classical_building", "1f3db"),
    ("clinking_beer_mugs", "1f37b"),
    ("clinking_glasses", "1f942"),
    ("clipboard", "1f4cb"),
    ("clock_face_eight-thirty", "1f563"),
    ("clock_face_eight_oclock", "1f557"),
    ("clock_face_eleven-thirty", "1f566"),
    ("clock_face_eleven_oclock", "1f55a"),
    ("clock_face_five-thirty", "1f560"),
    ("clock_face_five_oclock", "1f554"),
    ("clock_face_four-thirty", "1f55f"),
    ("clock_face_four_oclock", "1f553"),
    ("clock_face_nine-thirty", "1f564"),
    ("clock_face_nine_oclock", "1f558"),
    ("clock_face_one-thirty", "1f55c"),
    ("clock_face_one_oclock", "1f550"),
    ("clock_face_seven-thirty", "1f562"),
    ("clock_face_seven_oclock", "1f556"),
    ("clock_face_six-thirty", "1f561"),
    ("clock_face_six_oclock", "1f555"),
    ("clock_face_ten-thirty", "1f565"),
    ("clock_face_ten_oclock", "1f559"),
    ("clock_face_three-thirty", "1f55e"),
    ("clock_face_three_oclock", "1f552"),
    ("clock_face_twelve-thirty", "1f567"),
    ("clock_face_twelve_oclock", "1f55b"),
    ("clock_face_two-thirty", "1f55d"),
    ("clock_face_two_oclock", "1f551"),
    ("clockwise_downwards_and_upwards_open_circle_arrows", "1f503"),
    ("clockwise_rightwards_and_leftwards_open_circle_arrows", "1f501"),
    ("clockwise_rightwards_and_leftwards_open_circle_arrows_with_circled_one_overlay", "1f502"),
    ("clockwise_vertical_arrows", "1f503"),
    ("closed_book", "1f4d5"),
    ("closed_lock_with_key", "1f510"),
    ("closed_mailbox_with_lowered_flag", "1f4ea"),
    ("closed_mailbox_with_raised_flag", "1f4eb"),
    ("closed_umbrella", "1f302"),
    ("cloud", "2601"),
    ("cloud_with_lightning", "1f329"),
    ("cloud_with_lightning_and_rain", "26c8"),
    ("cloud_with_rain", "1f327"),
    ("cloud_with_snow", "1f328"),
    ("cloud_with_tornado", "1f32a"),
    ("clown_face", "1f921"),
    ("club_suit", "2663"),
    ("clutch_bag", "1f45d"),
    ("coat", "1f9e5"),
    ("cockroach", "1fab3"),
    ("cocktail_glass", "1f378"),
    ("coconut", "1f965"),
    ("coffee", "2615"),
    ("coffin", "26b0"),
    ("coin", "1fa99"),
    ("cold_face", "1f976"),
    ("cold_sweat", "1f630"),
    ("collision", "1f4a5"),
    ("collision_symbol", "1f4a5"),
    ("comet", "2604"),
    ("compass", "1f9ed"),
    ("compression", "1f5dc"),
    ("computer", "1f4bb"),
    ("computer_disk", "1f4bd"),
    ("computer_mouse", "1f5b1"),
    ("confetti_ball", "1f38a"),
    ("confounded", "1f616"),
    ("confounded_face", "1f616"),
    ("confused", "1f615"),
    ("confused_face", "1f615"),
    ("construction", "1f6a7"),
    ("construction_sign", "1f6a7"),
    ("construction_worker", "1f477"),
    ("control_knobs", "1f39b"),
    ("convenience_store", "1f3ea"),
    ("cook", "1f9d1-200d-1f373"),
    ("cooked_rice", "1f35a"),
    ("cookie", "1f36a"),
    ("cooking", "1f373"),
    ("cool", "1f192"),
    ("cool_button", "1f192"),
    ("copyright", "a9"),
    ("copyright_sign", "a9"),
    ("coral", "1fab8"),
    ("couch_and_lamp", "1f6cb"),
    ("counterclockwise_arrows_button", "1f504"),
    ("couple_with_heart", "1f491"),
    ("couple_with_heart_man_man", "1f468-200d-2764-200d-1f468"),
    ("couple_with_heart_woman_man", "1f469-200d-2764-200d-1f468"),
    ("couple_with_heart_woman_woman", "1f469-200d-2764-200d-1f469"),
    ("cow", "1f42e"),
    ("cow_face", "1f42e"),
    ("cowboy_hat_face", "1f920"),
    ("crab", "1f980"),
    ("crayon", "1f58d"),
    ("credit_card", "1f4b3"),
    ("crescent_moon", "1f319"),
    ("cricket", "1f997"),
    ("cricket_bat_and_ball", "1f3cf"),
    ("cricket_game", "1f3cf"),
    ("crocodile", "1f40a"),
    ("croissant", "1f950"),
    ("cross_mark", "274c"),
    ("cross_mark_button", "274e"),
    ("crossed_fingers", "1f91e"),
    ("crossed_flags", "1f38c"),
    ("crossed_swords", "2694"),
    ("crown", "1f451"),
    ("crutch", "1fa7c"),
    ("cry", "1f622"),
    ("crying_cat", "1f63f"),
    ("crying_cat_face", "1f63f"),
    ("crying_face", "1f622"),
    ("crystal_ball", "1f52e"),
    ("cucumber", "1f952"),
    ("cup_with_straw", "1f964"),
    ("cupcake", "1f9c1"),
    ("cupid", "1f498"),
    ("curling_stone", "1f94c"),
    ("curly_loop", "27b0"),
    ("currency_exchange", "1f4b1"),
    ("curry_and_rice", "1f35b"),
    ("curry_rice", "1f35b"),
    ("custard", "1f36e"),
    ("customs", "1f6c3"),
    ("cut_of_meat", "1f969"),
    ("cyclone", "1f300"),
    ("dagger", "1f5e1"),
    ("dagger_knife", "1f5e1"),
    ("dancer", "1f483"),
    ("dango", "1f361"),
    ("dark_sunglasses", "1f576"),
    ("dash", "1f4a8"),
    ("dash_symbol", "1f4a8"),
    ("dashing_away", "1f4a8"),
    ("de", "1f1e9-1f1ea"),
    ("deaf_man", "1f9cf-200d-2642"),
    ("deaf_person", "1f9cf"),
    ("deaf_woman", "1f9cf-200d-2640"),
    ("deciduous_tree", "1f333"),
    ("deer", "1f98c"),
    ("delivery_truck", "1f69a"),
    ("department_store", "1f3ec"),
    ("derelict_house", "1f3da"),
    ("derelict_house_building", "1f3da"),
    ("desert", "1f3dc"),
    ("desert_island", "1f3dd"),
    ("desktop_computer", "1f5a5"),
    ("detective", "1f575"),
    ("diamond_shape_with_a_dot_inside", "1f4a0"),
    ("diamond_suit", "2666"),
    ("diamond_with_a_dot", "1f4a0"),
    ("dim_button", "1f505"),
    ("direct_hit", "1f3af"),
    ("disappointed", "1f61e"),
    ("disappointed_but_relieved_face", "1f625"),
    ("disappointed_face", "1f61e"),
    ("disappointed_relieved", "1f625"),
    ("disguised_face", "1f978"),
    ("distorted_face", "1faea"),
    ("divide", "2797"),
    ("diving_mask", "1f93f"),
    ("diya_lamp", "1fa94"),
    ("dizzy", "1f4ab"),
    ("dizzy_face", "1f635"),
    ("dizzy_symbol", "1f4ab"),
    ("dna", "1f9ec"),
    ("dna_double_helix", "1f9ec"),
    ("do_not_litter_symbol", "1f6af"),
    ("dodo", "1f9a4"),
    ("dog", "1f436"),
    ("dog_face", "1f436"),
    ("dollar", "1f4b5"),
    ("dollar_banknote", "1f4b5"),
    ("dolphin", "1f42c"),
    ("donkey", "1facf"),
    ("door", "1f6aa"),
    ("dotted_line_face", "1fae5"),
    ("dotted_six-pointed_star", "1f52f"),
    ("double_curly_loop", "27bf"),
    ("double_exclamation_mark", "203c"),
    ("double_vertical_bar", "23f8"),
    ("doughnut", "1f369"),
    ("dove", "1f54a"),
    ("dove_of_peace", "1f54a"),
    ("down-left_arrow", "2199"),
    ("down-pointing_red_triangle", "1f53b"),
    ("down-pointing_small_red_triangle", "1f53d"),
    ("down-right_arrow", "2198"),
    ("down_arrow", "2b07"),
    ("downcast_face_with_sweat", "1f613"),
    ("downwards_black_arrow", "2b07"),
    ("downwards_button", "1f53d"),
    ("dragon", "1f409"),
    ("dragon_face", "1f432"),
    ("dress", "1f457"),
    ("dromedary_camel", "1f42a"),
    ("drooling_face", "1f924"),
    ("drop_of_blood", "1fa78"),
    ("droplet", "1f4a7"),
    ("drum", "1f941"),
    ("drum_with_drumsticks", "1f941"),
    ("duck", "1f986"),
    ("dumpling", "1f95f"),
    ("dvd", "1f4c0"),
    ("e-mail", "1f4e7"),
    ("e-mail_symbol", "1f4e7"),
    ("eagle", "1f985"),
    ("ear", "1f442"),
    ("ear_of_corn", "1f33d"),
    ("ear_of_maize", "1f33d"),
    ("ear_of_rice", "1f33e"),
    ("ear_with_hearing_aid", "1f9bb"),
    ("earth_africa", "1f30d"),
    ("earth_americas", "1f30e"),
    ("earth_globe_americas", "1f30e"),
    ("earth_globe_asia-australia", "1f30f"),
    ("earth_globe_europe-africa", "1f30d"),
    ("egg", "1f95a"),
    ("eggplant", "1f346"),
    ("eight-pointed_star", "2734"),
    ("eight-spoked_asterisk", "2733"),
    ("eight-thirty", "1f563"),
    ("eight_oclock", "1f557"),
    ("eight_pointed_black_star", "2734"),
    ("eight_spoked_asterisk", "2733"),
    ("eject_button", "23cf"),
    ("eject_symbol", "23cf"),
    ("electric_light_bulb", "1f4a1"),
    ("electric_plug", "1f50c"),
    ("electric_torch", "1f526"),
    ("elephant", "1f418"),
    ("elevator", "1f6d7"),
    ("eleven-thirty", "1f566"),
    ("eleven_oclock", "1f55a"),
    ("elf", "1f9dd"),
    ("email", "1f4e7"),
    ("empty_nest", "1fab9"),
    ("end_arrow", "1f51a"),
    ("end_with_leftwards_arrow_above", "1f51a"),
    ("enraged_face", "1f621"),
    ("envelope", "2709"),
    ("envelope_with_arrow", "1f4e9"),
    ("envelope_with_downwards_arrow_above", "1f4e9"),
    ("euro_banknote", "1f4b6"),
    ("european_castle", "1f3f0"),
    ("european_post_office", "1f3e4"),
    ("evergreen_tree", "1f332"),
    ("ewe", "1f411"),
    ("exclamation", "2757"),
    ("exclamation_question_mark", "2049"),
    ("exploding_head", "1f92f"),
    ("expressionless", "1f611"),
    ("expressionless_face", "1f611"),
    ("extraterrestrial_alien", "1f47d"),
    ("eye", "1f441"),
    ("eye_in_speech_bubble", "1f441-200d-1f5e8"),
    ("eyeglasses", "1f453"),
    ("eyes", "1f440"),
    ("face_blowing_a_kiss", "1f618"),
    ("face_exhaling", "1f62e-200d-1f4a8"),
    ("face_holding_back_tears", "1f979"),
    ("face_in_clouds", "1f636-200d-1f32b"),
    ("face_massage", "1f486"),
    ("face_palm", "1f926"),
    ("face_savoring_food", "1f60b"),
    ("face_savouring_delicious_food", "1f60b"),
    ("face_screaming_in_fear", "1f631"),
    ("face_throwing_a_kiss", "1f618"),
    ("face_vomiting", "1f92e"),
    ("face_with_bags_under_eyes", "1fae9"),
    ("face_with_cold_sweat", "1f613"),
    ("face_with_cowboy_hat", "1f920"),
    ("face_with_crossed-out_eyes", "1f635"),
    ("face_with_diagonal_mouth", "1fae4"),
    ("face_with_finger_covering_closed_lips", "1f92b"),
    ("face_with_hand_over_mouth", "1f92d"),
    ("face_with_head-bandage", "1f915"),
    ("face_with_head_bandage", "1f915"),
    ("face_with_look_of_triumph", "1f624"),
    ("face_with_medical_mask", "1f637"),
    ("face_with_monocle", "1f9d0"),
    ("face_with_no_good_gesture", "1f645"),
    ("face_with_ok_gesture", "1f646"),
    ("face_with_one_eyebrow_raised", "1f928"),
    ("face_with_open_eyes_and_hand_over_mouth", "1fae2"),
    ("face_with_open_mouth", "1f62e"),
    ("face_with_open_mouth_and_cold_sweat", "1f630"),
    ("face_with_open_mouth_vomiting", "1f92e"),
    ("face_with_party_horn_and_party_hat", "1f973"),
    ("face_with_peeking_eye", "1fae3"),
    ("face_with_pleading_eyes", "1f97a"),
    ("face_with_raised_eyebrow", "1f928"),
    ("face_with_rolling_eyes", "1f644"),
    ("face_with_spiral_eyes", "1f635-200d-1f4ab"),
    ("face_with_steam_from_nose", "1f624"),
    ("face_with_stuck-out_tongue", "1f61b"),
    ("face_with_stuck-out_tongue_and_tightly-closed_eyes", "1f61d"),
    ("face_with_stuck-out_tongue_and_winking_eye", "1f61c"),
    ("face_with_symbols_on_mouth", "1f92c"),
    ("face_with_tears_of_joy", "1f602"),
    ("face_with_thermometer", "1f912"),
    ("face_with_tongue", "1f61b"),
    ("face_with_uneven_eyes_and_wavy_mouth", "1f974"),
    ("face_without_mouth", "1f636"),
    ("facepunch", "1f44a"),
    ("factory", "1f3ed"),
    ("factory_worker", "1f9d1-200d-1f3ed"),
    ("fairy", "1f9da"),
    ("falafel", "1f9c6"),
    ("fallen_leaf", "1f342"),
    ("family", "1f46a"),
    ("family_adult_adult_child", "1f9d1-200d-1f9d1-200d-1f9d2"),
    ("family_adult_adult_child_child", "1f9d1-200d-1f9d1-200d-1f9d2-200d-1f9d2"),
    ("family_adult_child", "1f9d1-200d-1f9d2"),
    ("family_adult_child_child", "1f9d1-200d-1f9d2-200d-1f9d2"),
    ("family_man_boy", "1f468-200d-1f466"),
    ("family_man_boy_boy", "1f468-200d-1f466-200d-1f466"),
    ("family_man_girl", "1f468-200d-1f467"),
    ("family_man_girl_boy", "1f468-200d-1f467-200d-1f466"),
    ("family_man_girl_girl", "1f468-200d-1f467-200d-1f467"),
    ("family_man_man_boy", "1f468-200d-1f468-200d-1f466"),
    ("family_man_man_boy_boy", "1f468-200d-1f468-200d-1f466-200d-1f466"),
    ("family_man_man_girl", "1f468-200d-1f468-200d-1f467"),
    ("family_man_man_girl_boy", "1f468-200d-1f468-200d-1f467-200d-1f466"),
    ("family_man_man_girl_girl", "1f468-200d-1f468-200d-1f467-200d-1f467"),
    ("family_man_woman_boy", "1f468-200d-1f469-200d-1f466"),
    ("family_man_woman_boy_boy", "1f468-200d-1f469-200d-1f466-200d-1f466"),
    ("family_man_woman_girl", "1f468-200d-1f469-200d-1f467"),
    ("family_man_woman_girl_boy", "1f468-200d-1f469-200d-1f467-200d-1f466"),
    ("family_man_woman_girl_girl", "1f468-200d-1f469-200d-1f467-200d-1f467"),
    ("family_woman_boy", "1f469-200d-1f466"),
    ("family_woman_boy_boy", "1f469-200d-1f466-200d-1f466"),
    ("family_woman_girl", "1f469-200d-1f467"),
    ("family_woman_girl_boy", "1f469-200d-1f467-200d-1f466"),
    ("family_woman_girl_girl", "1f469-200d-1f467-200d-1f467"),
    ("family_woman_woman_boy", "1f469-200d-1f469-200d-1f466"),
    ("family_woman_woman_boy_boy", "1f469-200d-1f469-200d-1f466-200d-1f466"),
    ("family_woman_woman_girl", "1f469-200d-1f469-200d-1f467"),
    ("family_woman_woman_girl_boy", "1f469-200d-1f469-200d-1f467-200d-1f466"),
    ("family_woman_woman_girl_girl", "1f469-200d-1f469-200d-1f467-200d-1f467"),
    ("farmer", "1f9d1-200d-1f33e"),
    ("fast-forward_button", "23e9"),
    ("fast_down_button", "23ec"),
    ("fast_reverse_button", "23ea"),
    ("fast_up_button", "23eb"),
    ("father_christmas", "1f385"),
    ("fax_machine", "1f4e0"),
    ("fearful", "1f628"),
    ("fearful_face", "1f628"),
    ("feather", "1fab6"),
    ("female_sign", "2640"),
    ("fencer", "1f93a"),
    ("ferris_wheel", "1f3a1"),
    ("ferry", "26f4"),
    ("field_hockey", "1f3d1"),
    ("field_hockey_stick_and_ball", "1f3d1"),
    ("fight_cloud", "1faef"),
    ("file_cabinet", "1f5c4"),
    ("file_folder", "1f4c1"),
    ("film_frames", "1f39e"),
    ("film_projector", "1f4fd"),
    ("fingerprint", "1fac6"),
    ("fire", "1f525"),
    ("fire_engine", "1f692"),
    ("fire_extinguisher", "1f9ef"),
    ("firecracker", "1f9e8"),
    ("firefighter", "1f9d1-200d-1f692"),
    ("firework_sparkler", "1f387"),
    ("fireworks", "1f386"),
    ("first_place_medal", "1f947"),
    ("first_quarter_moon", "1f313"),
    ("first_quarter_moon_face", "1f31b"),
    ("first_quarter_moon_symbol", "1f313"),
    ("first_quarter_moon_with_face", "1f31b"),
    ("fish", "1f41f"),
    ("fish_cake_with_swirl", "1f365"),
    ("fish_cake_with_swirl_design", "1f365"),
    ("fishing_pole", "1f3a3"),
    ("fishing_pole_and_fish", "1f3a3"),
    ("fist", "270a"),
    ("fisted_hand_sign", "1f44a"),
    ("five-thirty", "1f560"),
    ("five_oclock", "1f554"),
    ("flag-ac", "1f1e6-1f1e8"),
    ("flag-ad", "1f1e6-1f1e9"),
    ("flag-ae", "1f1e6-1f1ea"),
    ("flag-af", "1f1e6-1f1eb"),
    ("flag-ag", "1f1e6-1f1ec"),
    ("flag-ai", "1f1e6-1f1ee"),
    ("flag-al", "1f1e6-1f1f1"),
    ("flag-am", "1f1e6-1f1f2"),
    ("flag-ao", "1f1e6-1f1f4"),
    ("flag-aq", "1f1e6-1f1f6"),
    ("flag-ar", "1f1e6-1f1f7"),
    ("flag-as", "1f1e6-1f1f8"),
    ("flag-at", "1f1e6-1f1f9"),
    ("flag-au", "1f1e6-1f1fa"),
    ("flag-aw", "1f1e6-1f1fc"),
    ("flag-ax", "1f1e6-1f1fd"),
    ("flag-az", "1f1e6-1f1ff"),
    ("flag-ba", "1f1e7-1f1e6"),
    ("flag-bb", "1f1e7-1f1e7"),
    ("flag-bd", "1f1e7-1f1e9"),
    ("flag-be", "1f1e7-1f1ea"),
    ("flag-bf", "1f1e7-1f1eb"),
    ("flag-bg", "1f1e7-1f1ec"),
    ("flag-bh", "1f1e7-1f1ed"),
    ("flag-bi", "1f1e7-1f1ee"),
    ("flag-bj", "1f1e7-1f1ef"),
    ("flag-bl", "1f1e7-1f1f1"),
    ("flag-bm", "1f1e7-1f1f2"),
    ("flag-bn", "1f1e7-1f1f3"),
    ("flag-bo", "1f1e7-1f1f4"),
    ("flag-bq", "1f1e7-1f1f6"),
    ("flag-br", "1f1e7-1f1f7"),
    ("flag-bs", "1f1e7-1f1f8"),
    ("flag-bt", "1f1e7-1f1f9"),
    ("flag-bv", "1f1e7-1f1fb"),
    ("flag-bw", "1f1e7-1f1fc"),
    ("flag-by", "1f1e7-1f1fe"),
    ("flag-bz", "1f1e7-1f1ff"),
    ("flag-ca", "1f1e8-1f1e6"),
    ("flag-cc", "1f1e8-1f1e8"),
    ("flag-cd", "1f1e8-1f1e9"),
    ("flag-cf", "1f1e8-1f1eb"),
    ("flag-cg", "1f1e8-1f1ec"),
    ("flag-ch", "1f1e8-1f1ed"),
    ("flag-ci", "1f1e8-1f1ee"),
    ("flag-ck", "1f1e8-1f1f0"),
    ("flag-cl", "1f1e8-1f1f1"),
    ("flag-cm", "1f1e8-1f1f2"),
    ("flag-cn", "1f1e8-1f1f3"),
    ("flag-co", "1f1e8-1f1f4"),
    ("flag-cp", "1f1e8-1f1f5"),
    ("flag-cq", "1f1e8-1f1f6"),
    ("flag-cr", "1f1e8-1f1f7"),
    ("flag-cu", "1f1e8-1f1fa"),
    ("flag-cv", "1f1e8-1f1fb"),
    ("flag-cw", "1f1e8-1f1fc"),
    ("flag-cx", "1f1e8-1f1fd"),
    ("flag-cy", "1f1e8-1f1fe"),
    ("flag-cz", "1f1e8-1f1ff"),
    ("flag-de", "1f1e9-1f1ea"),
    ("flag-dg", "1f1e9-1f1ec"),
    ("flag-dj", "1f1e9-1f1ef"),
    ("flag-dk", "1f1e9-1f1f0"),
    ("flag-dm", "1f1e9-1f1f2"),
    ("flag-do", "1f1e9-1f1f4"),
    ("flag-dz", "1f1e9-1f1ff"),
    ("flag-ea", "1f1ea-1f1e6"),
    ("flag-ec", "1f1ea-1f1e8"),
    ("flag-ee", "1f1ea-1f1ea"),
    ("flag-eg", "1f1ea-1f1ec"),
    ("flag-eh", "1f1ea-1f1ed"),
    ("flag-er", "1f1ea-1f1f7"),
    ("flag-es", "1f1ea-1f1f8"),
    ("flag-et", "1f1ea-1f1f9"),
    ("flag-eu", "1f1ea-1f1fa"),
    ("flag-fi", "1f1eb-1f1ee"),
    ("flag-fj", "1f1eb-1f1ef"),
    ("flag-fk", "1f1eb-1f1f0"),
    ("flag-fm", "1f1eb-1f1f2"),
    ("flag-fo", "1f1eb-1f1f4"),
    ("flag-fr", "1f1eb-1f1f7"),
    ("flag-ga", "1f1ec-1f1e6"),
    ("flag-gb", "1f1ec-1f1e7"),
    ("flag-gd", "1f1ec-1f1e9"),
    ("flag-ge", "1f1ec-1f1ea"),
    ("flag-gf", "1f1ec-1f1eb"),
    ("flag-gg", "1f1ec-1f1ec"),
    ("flag-gh", "1f1ec-1f1ed"),
    ("flag-gi", "1f1ec-1f1ee"),
    ("flag-gl", "1f1ec-1f1f1"),
    ("flag-gm", "1f1ec-1f1f2"),
    ("flag-gn", "1f1ec-1f1f3"),
    ("flag-gp", "1f1ec-1f1f5"),
    ("flag-gq", "1f1ec-1f1f6"),
    ("flag-gr", "1f1ec-1f1f7"),
    ("flag-gs", "1f1ec-1f1f8"),
    ("flag-gt", "1f1ec-1f1f9"),
    ("flag-gu", "1f1ec-1f1fa"),
    ("flag-gw", "1f1ec-1f1fc"),
    ("flag-gy", "1f1ec-1f1fe"),
    ("flag-hk", "1f1ed-1f1f0"),
    ("flag-hm", "1f1ed-1f1f2"),
    ("flag-hn", "1f1ed-1f1f3"),
    ("flag-hr", "1f1ed-1f1f7"),
    ("flag-ht", "1f1ed-1f1f9"),
    ("flag-hu", "1f1ed-1f1fa"),
    ("flag-ic", "1f1ee-1f1e8"),
    ("flag-id", "1f1ee-1f1e9"),
    ("flag-ie", "1f1ee-1f1ea"),
    ("flag-il", "1f1ee-1f1f1"),
    ("flag-im", "1f1ee-1f1f2"),
    ("flag-in", "1f1ee-1f1f3"),
    ("flag-io", "1f1ee-1f1f4"),
    ("flag-iq", "1f1ee-1f1f6"),
    ("flag-ir", "1f1ee-1f1f7"),
    ("flag-is", "1f1ee-1f1f8"),
    ("flag-it", "1f1ee-1f1f9"),
    ("flag-je", "1f1ef-1f1ea"),
    ("flag-jm", "1f1ef-1f1f2"),
    ("flag-jo", "1f1ef-1f1f4"),
    ("flag-jp", "1f1ef-1f1f5"),
    ("flag-ke", "1f1f0-1f1ea"),
    ("flag-kg", "1f1f0-1f1ec"),
    ("flag-kh", "1f1f0-1f1ed"),
    ("flag-ki", "1f1f0-1f1ee"),
    ("flag-km", "1f1f0-1f1f2"),
    ("flag-kn", "1f1f0-1f1f3"),
    ("flag-kp", "1f1f0-1f1f5"),
    ("flag-kr", "1f1f0-1f1f7"),
    ("flag-kw", "1f1f0-1f1fc"),
    ("flag-ky", "1f1f0-1f1fe"),
    ("flag-kz", "1f1f0-1f1ff"),
    ("flag-la", "1f1f1-1f1e6"),
    ("flag-lb", "1f1f1-1f1e7"),
    ("flag-lc", "1f1f1-1f1e8"),
    ("flag-li", "1f1f1-1f1ee"),
    ("flag-lk", "1f1f1-1f1f0"),
    ("flag-lr", "1f1f1-1f1f7"),
    ("flag-ls", "1f1f1-1f1f8"),
    ("flag-lt", "1f1f1-1f1f9"),
    ("flag-lu", "1f1f1-1f1fa"),
    ("flag-lv", "1f1f1-1f1fb"),
    ("flag-ly", "1f1f1-1f1fe"),
    ("flag-ma", "1f1f2-1f1e6"),
    ("flag-mc", "1f1f2-1f1e8"),
    ("flag-md", "1f1f2-1f1e9"),
    ("flag-me", "1f1f2-1f1ea"),
    ("flag-mf", "1f1f2-1f1eb"),
    ("flag-mg", "1f1f2-1f1ec"),
    ("flag-mh", "1f1f2-1f1ed"),
    ("flag-mk", "1f1f2-1f1f0"),
    ("flag-ml", "1f1f2-1f1f1"),
    ("flag-mm", "1f1f2-1f1f2"),
    ("flag-mn", "1f1f2-1f1f3"),
    ("flag-mo", "1f1f2-1f1f4"),
    ("flag-mp", "1f1f2-1f1f5"),
    ("flag-mq", "1f1f2-1f1f6"),
    ("flag-mr", "1f1f2-1f1f7"),
    ("flag-ms", "1f1f2-1f1f8"),
    ("flag-mt", "1f1f2-1f1f9"),
    ("flag-mu", "1f1f2-1f1fa"),
    ("flag-mv", "1f1f2-1f1fb"),
    ("flag-mw", "1f1f2-1f1fc"),
    ("flag-mx", "1f1f2-1f1fd"),
    ("flag-my", "1f1f2-1f1fe"),
    ("flag-mz", "1f1f2-1f1ff"),
    ("flag-na", "1f1f3-1f1e6"),
    ("flag-nc", "1f1f3-1f1e8"),
    ("flag-ne", "1f1f3-1f1ea"),
    ("flag-nf", "1f1f3-1f1eb"),
    ("flag-ng", "1f1f3-1f1ec"),
    ("flag-ni", "1f1f3-1f1ee"),
    ("flag-nl", "1f1f3-1f1f1"),
    ("flag-no", "1f1f3-1f1f4"),
    ("flag-np", "1f1f3-1f1f5"),
    ("flag-nr", "1f1f3-1f1f7"),
    ("flag-nu", "1f1f3-1f1fa"),
    ("flag-nz", "1f1f3-1f1ff"),
    ("flag-om", "1f1f4-1f1f2"),
    ("flag-pa", "1f1f5-1f1e6"),
    ("flag-pe", "1f1f5-1f1ea"),
    ("flag-pf", "1f1f5-1f1eb"),
    ("flag-pg", "1f1f5-1f1ec"),
    ("flag-ph", "1f1f5-1f1ed"),
    ("flag-pk", "1f1f5-1f1f0"),
    ("flag-pl", "1f1f5-1f1f1"),
    ("flag-pm", "1f1f5-1f1f2"),
    ("flag-pn", "1f1f5-1f1f3"),
    ("flag-pr", "1f1f5-1f1f7"),
    ("flag-ps", "1f1f5-1f1f8"),
    ("flag-pt", "1f1f5-1f1f9"),
    ("flag-pw", "1f1f5-1f1fc"),
    ("flag-py", "1f1f5-1f1fe"),
    ("flag-qa", "1f1f6-1f1e6"),
    ("flag-re", "1f1f7-1f1ea"),
    ("flag-ro", "1f1f7-1f1f4"),
    ("flag-rs", "1f1f7-1f1f8"),
    ("flag-ru", "1f1f7-1f1fa"),
    ("flag-rw", "1f1f7-1f1fc"),
    ("flag-sa", "1f1f8-1f1e6"),
    ("flag-sb", "1f1f8-1f1e7"),
    ("flag-sc", "1f1f8-1f1e8"),
    ("flag-sd", "1f1f8-1f1e9"),
    ("flag-se", "1f1f8-1f1ea"),
    ("flag-sg", "1f1f8-1f1ec"),
    ("flag-sh", "1f1f8-1f1ed"),
    ("flag-si", "1f1f8-1f1ee"),
    ("flag-sj", "1f1f8-1f1ef"),
    ("flag-sk", "1f1f8-1f1f0"),
    ("flag-sl", "1f1f8-1f1f1"),
    ("flag-sm", "1f1f8-1f1f2"),
    ("flag-sn", "1f1f8-1f1f3"),
    ("flag-so", "1f1f8-1f1f4"),
    ("flag-sr", "1f1f8-1f1f7"),
    ("flag-ss", "1f1f8-1f1f8"),
    ("flag-st", "1f1f8-1f1f9"),
    ("flag-sv", "1f1f8-1f1fb"),
    ("flag-sx", "1f1f8-1f1fd"),
    ("flag-sy", "1f1f8-1f1fe"),
    ("flag-sz", "1f1f8-1f1ff"),
    ("flag-ta", "1f1f9-1f1e6"),
    ("flag-tc", "1f1f9-1f1e8"),
    ("flag-td", "1f1f9-1f1e9"),
    ("flag-tf", "1f1f9-1f1eb"),
    ("flag-tg", "1f1f9-1f1ec"),
    ("flag-th", "1f1f9-1f1ed"),
    ("flag-tj", "1f1f9-1f1ef"),
    ("flag-tk", "1f1f9-1f1f0"),
    ("flag-tl", "1f1f9-1f1f1"),
    ("flag-tm", "1f1f9-1f1f2"),
    ("flag-tn", "1f1f9-1f1f3"),
    ("flag-to", "1f1f9-1f1f4"),
    ("flag-tr", "1f1f9-1f1f7"),
    ("flag-tt", "1f1f9-1f1f9"),
    ("flag-tv", "1f1f9-1f1fb"),
    ("flag-tw", "1f1f9-1f1fc"),
    ("flag-tz", "1f1f9-1f1ff"),
    ("flag-ua", "1f1fa-1f1e6"),
    ("flag-ug", "1f1fa-1f1ec"),
    ("flag-um", "1f1fa-1f1f2"),
    ("flag-un", "1f1fa-1f1f3"),
    ("flag-us", "1f1fa-1f1f8"),
    ("flag-uy", "1f1fa-1f1fe"),
    ("flag-uz", "1f1fa-1f1ff"),
    ("flag-va", "1f1fb-1f1e6"),
    ("flag-vc", "1f1fb-1f1e8"),
    ("flag-ve", "1f1fb-1f1ea"),
    ("flag-vg", "1f1fb-1f1ec"),
    ("flag-vi", "1f1fb-1f1ee"),
    ("flag-vn", "1f1fb-1f1f3"),
    ("flag-vu", "1f1fb-1f1fa"),
    ("flag-wf", "1f1fc-1f1eb"),
    ("flag-ws", "1f1fc-1f1f8"),
    ("flag-xk", "1f1fd-1f1f0"),
    ("flag-ye", "1f1fe-1f1ea"),
    ("flag-yt", "1f1fe-1f1f9"),
    ("flag-za", "1f1ff-1f1e6"),
    ("flag-zm", "1f1ff-1f1f2"),
    ("flag-zw", "1f1ff-1f1fc"),
    ("flag_afghanistan", "1f1e6-1f1eb"),
    ("flag_aland_islands", "1f1e6-1f1fd"),
    ("flag_albania", "1f1e6-1f1f1"),
    ("flag_algeria", "1f1e9-1f1ff"),
    ("flag_american_samoa", "1f1e6-1f1f8"),
    ("flag_andorra", "1f1e6-1f1e9"),
    ("flag_angola", "1f1e6-1f1f4"),
    ("flag_anguilla", "1f1e6-1f1ee"),
    ("flag_antarctica", "1f1e6-1f1f6"),
    ("flag_antigua_and_barbuda", "1f1e6-1f1ec"),
    ("flag_argentina", "1f1e6-1f1f7"),
    ("flag_armenia", "1f1e6-1f1f2"),
    ("flag_aruba", "1f1e6-1f1fc"),
    ("flag_ascension_island", "1f1e6-1f1e8"),
    ("flag_australia", "1f1e6-1f1fa"),
    ("flag_austria", "1f1e6-1f1f9"),
    ("flag_azerbaijan", "1f1e6-1f1ff"),
    ("flag_bahamas", "1f1e7-1f1f8"),
    ("flag_bahrain", "1f1e7-1f1ed"),
    ("flag_bangladesh", "1f1e7-1f1e9"),
    ("flag_barbados", "1f1e7-1f1e7"),
    ("flag_belarus", "1f1e7-1f1fe"),
    ("flag_belgium", "1f1e7-1f1ea"),
    ("flag_belize", "1f1e7-1f1ff"),
    ("flag_benin", "1f1e7-1f1ef"),
    ("flag_bermuda", "1f1e7-1f1f2"),
    ("flag_bhutan", "1f1e7-1f1f9"),
    ("flag_bolivia", "1f1e7-1f1f4"),
    ("flag_bosnia_and_herzegovina", "1f1e7-1f1e6"),
    ("flag_botswana", "1f1e7-1f1fc"),
    ("flag_bouvet_island", "1f1e7-1f1fb"),
    ("flag_brazil", "1f1e7-1f1f7"),
    ("flag_british_indian_ocean_territory", "1f1ee-1f1f4"),
    ("flag_british_virgin_islands", "1f1fb-1f1ec"),
    ("flag_brunei", "1f1e7-1f1f3"),
    ("flag_bulgaria", "1f1e7-1f1ec"),
    ("flag_burkina_faso", "1f1e7-1f1eb"),
    ("flag_burundi", "1f1e7-1f1ee"),
    ("flag_cambodia", "1f1f0-1f1ed"),
    ("flag_cameroon", "1f1e8-1f1f2"),
    ("flag_canada", "1f1e8-1f1e6"),
    ("flag_canary_islands", "1f1ee-1f1e8"),
    ("flag_cape_verde", "1f1e8-1f1fb"),
    ("flag_caribbean_netherlands", "1f1e7-1f1f6"),
    ("flag_cayman_islands", "1f1f0-1f1fe"),
    ("flag_central_african_republic", "1f1e8-1f1eb"),
    ("flag_ceuta_and_melilla", "1f1ea-1f1e6"),
    ("flag_chad", "1f1f9-1f1e9"),
    ("flag_chile", "1f1e8-1f1f1"),
    ("flag_china", "1f1e8-1f1f3"),
    ("flag_christmas_island", "1f1e8-1f1fd"),
    ("flag_clipperton_island", "1f1e8-1f1f5"),
    ("flag_cocos_keeling_islands", "1f1e8-1f1e8"),
    ("flag_colombia", "1f1e8-1f1f4"),
    ("flag_comoros", "1f1f0-1f1f2"),
    ("flag_congo_-_brazzaville", "1f1e8-1f1ec"),
    ("flag_congo_-_kinshasa", "1f1e8-1f1e9"),
    ("flag_cook_islands", "1f1e8-1f1f0"),
    ("flag_costa_rica", "1f1e8-1f1f7"),
    ("flag_cote_divoire", "1f1e8-1f1ee"),
    ("flag_croatia", "1f1ed-1f1f7"),
    ("flag_cuba", "1f1e8-1f1fa"),
    ("flag_curacao", "1f1e8-1f1fc"),
    ("flag_cyprus", "1f1e8-1f1fe"),
    ("flag_czechia", "1f1e8-1f1ff"),
    ("flag_denmark", "1f1e9-1f1f0"),
    ("flag_diego_garcia", "1f1e9-1f1ec"),
    ("flag_djibouti", "1f1e9-1f1ef"),
    ("flag_dominica", "1f1e9-1f1f2"),
    ("flag_dominican_republic", "1f1e9-1f1f4"),
    ("flag_ecuador", "1f1ea-1f1e8"),
    ("flag_egypt", "1f1ea-1f1ec"),
    ("flag_el_salvador", "1f1f8-1f1fb"),
    ("flag_equatorial_guinea", "1f1ec-1f1f6"),
    ("flag_eritrea", "1f1ea-1f1f7"),
    ("flag_estonia", "1f1ea-1f1ea"),
    ("flag_eswatini", "1f1f8-1f1ff"),
    ("flag_ethiopia", "1f1ea-1f1f9"),
    ("flag_european_union", "1f1ea-1f1fa"),
    ("flag_falkland_islands", "1f1eb-1f1f0"),
    ("flag_faroe_islands", "1f1eb-1f1f4"),
    ("flag_fiji", "1f1eb-1f1ef"),
    ("flag_finland", "1f1eb-1f1ee"),
    ("flag_france", "1f1eb-1f1f7"),
    ("flag_french_guiana", "1f1ec-1f1eb"),
    ("flag_french_polynesia", "1f1f5-1f1eb"),
    ("flag_french_southern_territories", "1f1f9-1f1eb"),
    ("flag_gabon", "1f1ec-1f1e6"),
    ("flag_gambia", "1f1ec-1f1f2"),
    ("flag_georgia", "1f1ec-1f1ea"),
    ("flag_germany", "1f1e9-1f1ea"),
    ("flag_ghana", "1f1ec-1f1ed"),
    ("flag_gibraltar", "1f1ec-1f1ee"),
    ("flag_greece", "1f1ec-1f1f7"),
    ("flag_greenland", "1f1ec-1f1f1"),
    ("flag_grenada", "1f1ec-1f1e9"),
    ("flag_guadeloupe", "1f1ec-1f1f5"),
    ("flag_guam", "1f1ec-1f1fa"),
    ("flag_guatemala", "1f1ec-1f1f9"),
    ("flag_guernsey", "1f1ec-1f1ec"),
    ("flag_guinea", "1f1ec-1f1f3"),
    ("flag_guinea-bissau", "1f1ec-1f1fc"),
    ("flag_guyana", "1f1ec-1f1fe"),
    ("flag_haiti", "1f1ed-1f1f9"),
    ("flag_heard_and_mcdonald_islands", "1f1ed-1f1f2"),
    ("flag_honduras", "1f1ed-1f1f3"),
    ("flag_hong_kong_sar_china", "1f1ed-1f1f0"),
    ("flag_hungary", "1f1ed-1f1fa"),
    ("flag_iceland", "1f1ee-1f1f8"),
    ("flag_in_hole", "26f3"),
    ("flag_india", "1f1ee-1f1f3"),
    ("flag_indonesia", "1f1ee-1f1e9"),
    ("flag_iran", "1f1ee-1f1f7"),
    ("flag_iraq", "1f1ee-1f1f6"),
    ("flag_ireland", "1f1ee-1f1ea"),
    ("flag_isle_of_man", "1f1ee-1f1f2"),
    ("flag_israel", "1f1ee-1f1f1"),
    ("flag_italy", "1f1ee-1f1f9"),
    ("flag_jamaica", "1f1ef-1f1f2"),
    ("flag_japan", "1f1ef-1f1f5"),
    ("flag_jersey", "1f1ef-1f1ea"),
    ("flag_jordan", "1f1ef-1f1f4"),
    ("flag_kazakhstan", "1f1f0-1f1ff"),
    ("flag_kenya", "1f1f0-1f1ea"),
    ("flag_kiribati", "1f1f0-1f1ee"),
    ("flag_kosovo", "1f1fd-1f1f0"),
    ("flag_kuwait", "1f1f0-1f1fc"),
    ("flag_kyrgyzstan", "1f1f0-1f1ec"),
    ("flag_laos", "1f1f1-1f1e6"),
    ("flag_latvia", "1f1f1-1f1fb"),
    ("flag_lebanon", "1f1f1-1f1e7"),
    ("flag_lesotho", "1f1f1-1f1f8"),
    ("flag_liberia", "1f1f1-1f1f7"),
    ("flag_libya", "1f1f1-1f1fe"),
    ("flag_liechtenstein", "1f1f1-1f1ee"),
    ("flag_lithuania", "1f1f1-1f1f9"),
    ("flag_luxembourg", "1f1f1-1f1fa"),
    ("flag_macao_sar_china", "1f1f2-1f1f4"),
    ("flag_madagascar", "1f1f2-1f1ec"),
    ("flag_malawi", "1f1f2-1f1fc"),
    ("flag_malaysia", "1f1f2-1f1fe"),
    ("flag_maldives", "1f1f2-1f1fb"),
    ("flag_mali", "1f1f2-1f1f1"),
    ("flag_malta", "1f1f2-1f1f9"),
    ("flag_marshall_islands", "1f1f2-1f1ed"),
    ("flag_martinique", "1f1f2-1f1f6"),
    ("flag_mauritania", "1f1f2-1f1f7"),
    ("flag_mauritius", "1f1f2-1f1fa"),
    ("flag_mayotte", "1f1fe-1f1f9"),
    ("flag_mexico", "1f1f2-1f1fd"),
    ("flag_micronesia", "1f1eb-1f1f2"),
    ("flag_moldova", "1f1f2-1f1e9"),
    ("flag_monaco", "1f1f2-1f1e8"),
    ("flag_mongolia", "1f1f2-1f1f3"),
    ("flag_montenegro", "1f1f2-1f1ea"),
    ("flag_montserrat", "1f1f2-1f1f8"),
    ("flag_morocco", "1f1f2-1f1e6"),
    ("flag_mozambique", "1f1f2-1f1ff"),
    ("flag_myanmar_burma", "1f1f2-1f1f2"),
    ("flag_namibia", "1f1f3-1f1e6"),
    ("flag_nauru", "1f1f3-1f1f7"),
    ("flag_nepal", "1f1f3-1f1f5"),
    ("flag_netherlands", "1f1f3-1f1f1"),
    ("flag_new_caledonia", "1f1f3-1f1e8"),
    ("flag_new_zealand", "1f1f3-1f1ff"),
    ("flag_nicaragua", "1f1f3-1f1ee"),
    ("flag_niger", "1f1f3-1f1ea"),
    ("flag_nigeria", "1f1f3-1f1ec"),
    ("flag_niue", "1f1f3-1f1fa"),
    ("flag_norfolk_island", "1f1f3-1f1eb"),
    ("flag_north_korea", "1f1f0-1f1f5"),
    ("flag_north_macedonia", "1f1f2-1f1f0"),
    ("flag_northern_mariana_islands", "1f1f2-1f1f5"),
    ("flag_norway", "1f1f3-1f1f4"),
    ("flag_oman", "1f1f4-1f1f2"),
    ("flag_pakistan", "1f1f5-1f1f0"),
    ("flag_palau", "1f1f5-1f1fc"),
    ("flag_palestinian_territories", "1f1f5-1f1f8"),
    ("flag_panama", "1f1f5-1f1e6"),
    ("flag_papua_new_guinea", "1f1f5-1f1ec"),
    ("flag_paraguay", "1f1f5-1f1fe"),
    ("flag_peru", "1f1f5-1f1ea"),
    ("flag_philippines", "1f1f5-1f1ed"),
    ("flag_pitcairn_islands", "1f1f5-1f1f3"),
    ("flag_poland", "1f1f5-1f1f1"),
    ("flag_portugal", "1f1f5-1f1f9"),
    ("flag_puerto_rico", "1f1f5-1f1f7"),
    ("flag_qatar", "1f1f6-1f1e6"),
    ("flag_reunion", "1f1f7-1f1ea"),
    ("flag_romania", "1f1f7-1f1f4"),
    ("flag_russia", "1f1f7-1f1fa"),
    ("flag_rwanda", "1f1f7-1f1fc"),
    ("flag_samoa", "1f1fc-1f1f8"),
    ("flag_san_marino", "1f1f8-1f1f2"),
    ("flag_sao_tome_and_principe", "1f1f8-1f1f9"),
    ("flag_sark", "1f1e8-1f1f6"),
    ("flag_saudi_arabia", "1f1f8-1f1e6"),
    ("flag_senegal", "1f1f8-1f1f3"),
    ("flag_serbia", "1f1f7-1f1f8"),
    ("flag_seychelles", "1f1f8-1f1e8"),
    ("flag_sierra_leone", "1f1f8-1f1f1"),
    ("flag_singapore", "1f1f8-1f1ec"),
    ("flag_sint_maarten", "1f1f8-1f1fd"),
    ("flag_slovakia", "1f1f8-1f1f0"),
    ("flag_slovenia", "1f1f8-1f1ee"),
    ("flag_solomon_islands", "1f1f8-1f1e7"),
    ("flag_somalia", "1f1f8-1f1f4"),
    ("flag_south_africa", "1f1ff-1f1e6"),
    ("flag_south_georgia_and_south_sandwich_islands", "1f1ec-1f1f8"),
    ("flag_south_korea", "1f1f0-1f1f7"),
    ("flag_south_sudan", "1f1f8-1f1f8"),
    ("flag_spain", "1f1ea-1f1f8"),
    ("flag_sri_lanka", "1f1f1-1f1f0"),
    ("flag_st_barthelemy", "1f1e7-1f1f1"),
    ("flag_st_helena", "1f1f8-1f1ed"),
    ("flag_st_kitts_and_nevis", "1f1f0-1f1f3"),
    ("flag_st_lucia", "1f1f1-1f1e8"),
    ("flag_st_martin", "1f1f2-1f1eb"),
    ("flag_st_pierre_and_miquelon", "1f1f5-1f1f2"),
    ("flag_st_vincent_and_grenadines", "1f1fb-1f1e8"),
    ("flag_sudan", "1f1f8-1f1e9"),
    ("flag_suriname", "1f1f8-1f1f7"),
    ("flag_svalbard_and_jan_mayen", "1f1f8-1f1ef"),
    ("flag_sweden", "1f1f8-1f1ea"),
    ("flag_switzerland", "1f1e8-1f1ed"),
    ("flag_syria", "1f1f8-1f1fe"),
    ("flag_taiwan", "1f1f9-1f1fc"),
    ("flag_tajikistan", "1f1f9-1f1ef"),
    ("flag_tanzania", "1f1f9-1f1ff"),
    ("flag_thailand", "1f1f9-1f1ed"),
    ("flag_timor-leste", "1f1f9-1f1f1"),
    ("flag_togo", "1f1f9-1f1ec"),
    ("flag_tokelau", "1f1f9-1f1f0"),
    ("flag_tonga", "1f1f9-1f1f4"),
    ("flag_trinidad_and_tobago", "1f1f9-1f1f9"),
    ("flag_tristan_da_cunha", "1f1f9-1f1e6"),
    ("flag_tunisia", "1f1f9-1f1f3"),
    ("flag_turkiye", "1f1f9-1f1f7"),
    ("flag_turkmenistan", "1f1f9-1f1f2"),
    ("flag_turks_and_caicos_islands", "1f1f9-1f1e8"),
    ("flag_tuvalu", "1f1f9-1f1fb"),
    ("flag_uganda", "1f1fa-1f1ec"),
    ("flag_ukraine", "1f1fa-1f1e6"),
    ("flag_united_arab_emirates", "1f1e6-1f1ea"),
    ("flag_united_kingdom", "1f1ec-1f1e7"),
    ("flag_united_nations", "1f1fa-1f1f3"),
    ("flag_united_states", "1f1fa-1f1f8"),
    ("flag_uruguay", "1f1fa-1f1fe"),
    ("flag_us_outlying_islands", "1f1fa-1f1f2"),
    ("flag_us_virgin_islands", "1f1fb-1f1ee"),
    ("flag_uzbekistan", "1f1fa-1f1ff"),
    ("flag_vanuatu", "1f1fb-1f1fa"),
    ("flag_vatican_city", "1f1fb-1f1e6"),
    ("flag_venezuela", "1f1fb-1f1ea"),
    ("flag_vietnam", "1f1fb-1f1f3"),
    ("flag_wallis_and_futuna", "1f1fc-1f1eb"),
    ("flag_western_sahara", "1f1ea-1f1ed"),
    ("flag_yemen", "1f1fe-1f1ea"),
    ("flag_zambia", "1f1ff-1f1f2"),
    ("flag_zimbabwe", "1f1ff-1f1fc"),
    ("flamingo", "1f9a9"),
    ("flashlight", "1f526"),
    ("flat_shoe", "1f97f"),
    ("flatbread", "1fad3"),
    ("fleur-de-lis", "269c"),
    ("flexed_biceps", "1f4aa"),
    ("floppy_disk", "1f4be"),
    ("flower_playing_cards", "1f3b4"),
    ("flushed", "1f633"),
    ("flushed_face", "1f633"),
    ("flute", "1fa88"),
    ("fly", "1fab0"),
    ("flying_disc", "1f94f"),
    ("flying_saucer", "1f6f8"),
    ("fog", "1f32b"),
    ("foggy", "1f301"),
    ("folded_hands", "1f64f"),
    ("folding_hand_fan", "1faad"),
    ("fondue", "1fad5"),
    ("foot", "1f9b6"),
    ("footprints", "1f463"),
    ("fork_and_knife", "1f374"),
    ("fork_and_knife_with_plate", "1f37d"),
    ("fortune_cookie", "1f960"),
    ("fountain", "26f2"),
    ("fountain_pen", "1f58b"),
    ("four-thirty", "1f55f"),
    ("four_leaf_clover", "1f340"),
    ("four_oclock", "1f553"),
    ("fox", "1f98a"),
    ("fox_face", "1f98a"),
    ("fr", "1f1eb-1f1f7"),
    ("frame_with_picture", "1f5bc"),
    ("framed_picture", "1f5bc"),
    ("free", "1f193"),
    ("free_button", "1f193"),
    ("freezing_face", "1f976"),
    ("french_fries", "1f35f"),
    ("fried_shrimp", "1f364"),
    ("frog", "1f438"),
    ("frog_face", "1f438"),
    ("front-facing_baby_chick", "1f425"),
    ("frowning", "1f626"),
    ("frowning_face", "2639"),
    ("frowning_face_with_open_mouth", "1f626"),
    ("fuel_pump", "26fd"),
    ("full_moon", "1f315"),
    ("full_moon_face", "1f31d"),
    ("full_moon_symbol", "1f315"),
    ("full_moon_with_face", "1f31d"),
    ("funeral_urn", "26b1"),
    ("game_die", "1f3b2"),
    ("garlic", "1f9c4"),
    ("gb", "1f1ec-1f1e7"),
    ("gear", "2699"),
    ("gem_stone", "1f48e"),
    ("gemini", "264a"),
    ("genie", "1f9de"),
    ("ghost", "1f47b"),
    ("gift", "1f381"),
    ("ginger_root", "1fada"),
    ("giraffe", "1f992"),
    ("giraffe_face", "1f992"),
    ("girl", "1f467"),
    ("glass_of_milk", "1f95b"),
    ("glasses", "1f453"),
    ("globe_showing_americas", "1f30e"),
    ("globe_showing_asia-australia", "1f30f"),
    ("globe_showing_europe-africa", "1f30d"),
    ("globe_with_meridians", "1f310"),
    ("gloves", "1f9e4"),
    ("glowing_star", "1f31f"),
    ("goal_net", "1f945"),
    ("goat", "1f410"),
    ("goblin", "1f47a"),
    ("goggles", "1f97d"),
    ("golfer", "1f3cc"),
    ("goose", "1fabf"),
    ("gorilla", "1f98d"),
    ("graduation_cap", "1f393"),
    ("grapes", "1f347"),
    ("green_apple", "1f34f"),
    ("green_book", "1f4d7"),
    ("green_circle", "1f7e2"),
    ("green_heart", "1f49a"),
    ("green_salad", "1f957"),
    ("green_square", "1f7e9"),
    ("grey_exclamation", "2755"),
    ("grey_heart", "1fa76"),
    ("grey_question", "2754"),
    ("grimacing", "1f62c"),
    ("grimacing_face", "1f62c"),
    ("grin", "1f601"),
    ("grinning", "1f600"),
    ("grinning_cat", "1f63a"),
    ("grinning_cat_face_with_smiling_eyes", "1f638"),
    ("grinning_cat_with_smiling_eyes", "1f638"),
    ("grinning_face", "1f600"),
    ("grinning_face_with_big_eyes", "1f603"),
    ("grinning_face_with_one_large_and_one_small_eye", "1f92a"),
    ("grinning_face_with_smiling_eyes", "1f604"),
    ("grinning_face_with_star_eyes", "1f929"),
    ("grinning_face_with_sweat", "1f605"),
    ("grinning_squinting_face", "1f606"),
    ("growing_heart", "1f497"),
    ("guard", "1f482"),
    ("guardsman", "1f482"),
    ("guide_dog", "1f9ae"),
    ("guitar", "1f3b8"),
    ("hair_pick", "1faae"),
    ("haircut", "1f487"),
    ("hairy_creature", "1fac8"),
    ("hamburger", "1f354"),
    ("hammer", "1f528"),
    ("hammer_and_pick", "2692"),
    ("hammer_and_wrench", "1f6e0"),
    ("hamsa", "1faac"),
    ("hamster", "1f439"),
    ("hamster_face", "1f439"),
    ("hand", "270b"),
    ("hand_with_fingers_splayed", "1f590"),
    ("hand_with_index_and_middle_fingers_crossed", "1f91e"),
    ("hand_with_index_finger_and_thumb_crossed", "1faf0"),
    ("handbag", "1f45c"),
    ("handball", "1f93e"),
    ("handshake", "1f91d"),
    ("hankey", "1f4a9"),
    ("happy_person_raising_one_hand", "1f64b"),
    ("harp", "1fa89"),
    ("hatching_chick", "1f423"),
    ("head_shaking_horizontally", "1f642-200d-2194"),
    ("head_shaking_vertically", "1f642-200d-2195"),
    ("headphone", "1f3a7"),
    ("headstone", "1faa6"),
    ("health_worker", "1f9d1-200d-2695"),
    ("hear-no-evil_monkey", "1f649"),
    ("hear_no_evil", "1f649"),
    ("heart", "2764"),
    ("heart_decoration", "1f49f"),
    ("heart_exclamation", "2763"),
    ("heart_eyes", "1f60d"),
    ("heart_eyes_cat", "1f63b"),
    ("heart_hands", "1faf6"),
    ("heart_on_fire", "2764-200d-1f525"),
    ("heart_suit", "2665"),
    ("heart_with_arrow", "1f498"),
    ("heart_with_ribbon", "1f49d"),
    ("heartbeat", "1f493"),
    ("heartpulse", "1f497"),
    ("heavy_black_heart", "2764"),
    ("heavy_check_mark", "2714"),
    ("heavy_division_sign", "2797"),
    ("heavy_dollar_sign", "1f4b2"),
    ("heavy_equals_sign", "1f7f0"),
    ("heavy_exclamation_mark", "2757"),
    ("heavy_exclamation_mark_symbol", "2757"),
    ("heavy_heart_exclamation_mark_ornament", "2763"),
    ("heavy_large_circle", "2b55"),
    ("heavy_minus_sign", "2796"),
    ("heavy_multiplication_x", "2716"),
    ("heavy_plus_sign", "2795"),
    ("hedgehog", "1f994"),
    ("helicopter", "1f681"),
    ("helmet_with_white_cross", "26d1"),
    ("herb", "1f33f"),
    ("hibiscus", "1f33a"),
    ("high-heeled_shoe", "1f460"),
    ("high-speed_train", "1f684"),
    ("high-speed_train_with_bullet_nose", "1f685"),
    ("high_brightness_symbol", "1f506"),
    ("high_voltage", "26a1"),
    ("high_voltage_sign", "26a1"),
    ("hiking_boot", "1f97e"),
    ("hindu_temple", "1f6d5"),
    ("hippopotamus", "1f99b"),
    ("hocho", "1f52a"),
    ("hole", "1f573"),
    ("hollow_red_circle", "2b55"),
    ("honey_pot", "1f36f"),
    ("honeybee", "1f41d"),
    ("hook", "1fa9d"),
    ("horizontal_traffic_light", "1f6a5"),
    ("horse", "1f40e"),
    ("horse_face", "1f434"),
    ("horse_racing", "1f3c7"),
    ("hospital", "1f3e5"),
    ("hot_beverage", "2615"),
    ("hot_dog", "1f32d"),
    ("hot_face", "1f975"),
    ("hot_pepper", "1f336"),
    ("hot_springs", "2668"),
    ("hotel", "1f3e8"),
    ("hourglass", "231b"),
    ("hourglass_done", "231b"),
    ("hourglass_not_done", "23f3"),
    ("hourglass_with_flowing_sand", "23f3"),
    ("house", "1f3e0"),
    ("house_building", "1f3e0"),
    ("house_buildings", "1f3d8"),
    ("house_with_garden", "1f3e1"),
    ("houses", "1f3d8"),
    ("hugging_face", "1f917"),
    ("hugs", "1f917"),
    ("hundred_points", "1f4af"),
    ("hundred_points_symbol", "1f4af"),
    ("hushed", "1f62f"),
    ("hushed_face", "1f62f"),
    ("hut", "1f6d6"),
    ("hyacinth", "1fabb"),
    ("i_love_you_hand_sign", "1f91f"),
    ("ice", "1f9ca"),
    ("ice_cream", "1f368"),
    ("ice_cube", "1f9ca"),
    ("ice_hockey", "1f3d2"),
    ("ice_hockey_stick_and_puck", "1f3d2"),
    ("ice_skate", "26f8"),
    ("id_button", "1f194"),
    ("identification_card", "1faaa"),
    ("imp", "1f47f"),
    ("inbox_tray", "1f4e5"),
    ("incoming_envelope", "1f4e8"),
    ("index_pointing_at_the_viewer", "1faf5"),
    ("index_pointing_up", "261d"),
    ("infinity", "267e"),
    ("information", "2139"),
    ("information_desk_person", "1f481"),
    ("information_source", "2139"),
    ("innocent", "1f607"),
    ("input_latin_letters", "1f524"),
    ("input_latin_lowercase", "1f521"),
    ("input_latin_uppercase", "1f520"),
    ("input_numbers", "1f522"),
    ("input_symbol_for_latin_capital_letters", "1f520"),
    ("input_symbol_for_latin_letters", "1f524"),
    ("input_symbol_for_latin_small_letters", "1f521"),
    ("input_symbol_for_numbers", "1f522"),
    ("input_symbol_for_symbols", "1f523"),
    ("input_symbols", "1f523"),
    ("interrobang", "2049"),
    ("it", "1f1ee-1f1f9"),
    ("izakaya_lantern", "1f3ee"),
    ("jack-o-lantern", "1f383"),
    ("japanese_acceptable_button", "1f251"),
    ("japanese_application_button", "1f238"),
    ("japanese_bargain_button", "1f250"),
    ("japanese_castle", "1f3ef"),
    ("japanese_congratulations_button", "3297"),
    ("japanese_discount_button", "1f239"),
    ("japanese_dolls", "1f38e"),
    ("japanese_free_of_charge_button", "1f21a"),
    ("japanese_goblin", "1f47a"),
    ("japanese_here_button", "1f201"),
    ("japanese_monthly_amount_button", "1f237"),
    ("japanese_no_vacancy_button", "1f235"),
    ("japanese_not_free_of_charge_button", "1f236"),
    ("japanese_ogre", "1f479"),
    ("japanese_open_for_business_button", "1f23a"),
    ("japanese_passing_grade_button", "1f234"),
    ("japanese_post_office", "1f3e3"),
    ("japanese_prohibited_button", "1f232"),
    ("japanese_reserved_button", "1f22f"),
    ("japanese_secret_button", "3299"),
    ("japanese_service_charge_button", "1f202"),
    ("japanese_symbol_for_beginner", "1f530"),
    ("japanese_vacancy_button", "1f233"),
    ("jar", "1fad9"),
    ("jeans", "1f456"),
    ("jellyfish", "1fabc"),
    ("jigsaw_puzzle_piece", "1f9e9"),
    ("joker", "1f0cf"),
    ("joy", "1f602"),
    ("joy_cat", "1f639"),
    ("joystick", "1f579"),
    ("jp", "1f1ef-1f1f5"),
    ("judge", "1f9d1-200d-2696"),
    ("juggling", "1f939"),
    ("kaaba", "1f54b"),
    ("kangaroo", "1f998"),
    ("key", "1f511"),
    ("keyboard", "2328"),
    ("keycap_0", "30-20e3"),
    ("keycap_1", "31-20e3"),
    ("keycap_10", "1f51f"),
    ("keycap_2", "32-20e3"),
    ("keycap_3", "33-20e3"),
    ("keycap_4", "34-20e3"),
    ("keycap_5", "35-20e3"),
    ("keycap_6", "36-20e3"),
    ("keycap_7", "37-20e3"),
    ("keycap_8", "38-20e3"),
    ("keycap_9", "39-20e3"),
    ("keycap_ten", "1f51f"),
    ("khanda", "1faaf"),
    ("kick_scooter", "1f6f4"),
    ("kimono", "1f458"),
    ("kiss", "1f48f"),
    ("kiss_man_man", "1f468-200d-2764-200d-1f48b-200d-1f468"),
    ("kiss_mark", "1f48b"),
    ("kiss_woman_man", "1f469-200d-2764-200d-1f48b-200d-1f468"),
    ("kiss_woman_woman", "1f469-200d-2764-200d-1f48b-200d-1f469"),
    ("kissing", "1f617"),
    ("kissing_cat", "1f63d"),
    ("kissing_cat_face_with_closed_eyes", "1f63d"),
    ("kissing_closed_eyes", "1f61a"),
    ("kissing_face", "1f617"),
    ("kissing_face_with_closed_eyes", "1f61a"),
    ("kissing_face_with_smiling_eyes", "1f619"),
    ("kissing_heart", "1f618"),
    ("kissing_smiling_eyes", "1f619"),
    ("kitchen_knife", "1f52a"),
    ("kite", "1fa81"),
    ("kiwi_fruit", "1f95d"),
    ("kiwifruit", "1f95d"),
    ("kneeling_person", "1f9ce"),
    ("knot", "1faa2"),
    ("koala", "1f428"),
    ("lab_coat", "1f97c"),
    ("label", "1f3f7"),
    ("lacrosse", "1f94d"),
    ("lacrosse_stick_and_ball", "1f94d"),
    ("ladder", "1fa9c"),
    ("lady_beetle", "1f41e"),
    ("landslide", "1f6d8"),
    ("laptop", "1f4bb"),
    ("large_blue_circle", "1f535"),
    ("large_blue_diamond", "1f537"),
    ("large_blue_square", "1f7e6"),
    ("large_brown_circle", "1f7e4"),
    ("large_brown_square", "1f7eb"),
    ("large_green_circle", "1f7e2"),
    ("large_green_square", "1f7e9"),
    ("large_orange_circle", "1f7e0"),
    ("large_orange_diamond", "1f536"),
    ("large_orange_square", "1f7e7"),
    ("large_purple_circle", "1f7e3"),
    ("large_purple_square", "1f7ea"),
    ("large_red_circle", "1f534"),
    ("large_red_square", "1f7e5"),
    ("large_yellow_circle", "1f7e1"),
    ("large_yellow_square", "1f7e8"),
    ("last_quarter_moon", "1f317"),
    ("last_quarter_moon_face", "1f31c"),
    ("last_quarter_moon_symbol", "1f317"),
    ("last_quarter_moon_with_face", "1f31c"),
    ("last_track_button", "23ee"),
    ("latin_cross", "271d"),
    ("laughing", "1f606"),
    ("leaf_fluttering_in_wind", "1f343"),
    ("leafless_tree", "1fabe"),
    ("leafy_green", "1f96c"),
    ("ledger", "1f4d2"),
    ("left-facing_fist", "1f91b"),
    ("left-pointing_magnifying_glass", "1f50d"),
    ("left-right_arrow", "2194"),
    ("left_arrow", "2b05"),
    ("left_arrow_curving_right", "21aa"),
    ("left_luggage", "1f6c5"),
    ("left_right_arrow", "2194"),
    ("left_speech_bubble", "1f5e8"),
    ("leftwards_arrow_with_hook", "21a9"),
    ("leftwards_black_arrow", "2b05"),
    ("leftwards_hand", "1faf2"),
    ("leftwards_pushing_hand", "1faf7"),
    ("leg", "1f9b5"),
    ("lemon", "1f34b"),
    ("leo", "264c"),
    ("leopard", "1f406"),
    ("level_slider", "1f39a"),
    ("libra", "264e"),
    ("light_blue_heart", "1fa75"),
    ("light_bulb", "1f4a1"),
    ("light_rail", "1f688"),
    ("lime", "1f34b-200d-1f7e9"),
    ("link", "1f517"),
    ("link_symbol", "1f517"),
    ("linked_paperclips", "1f587"),
    ("lion", "1f981"),
    ("lion_face", "1f981"),
    ("lips", "1f444"),
    ("lipstick", "1f484"),
    ("litter_in_bin_sign", "1f6ae"),
    ("lizard", "1f98e"),
    ("llama", "1f999"),
    ("lobster", "1f99e"),
    ("lock", "1f512"),
    ("lock_with_ink_pen", "1f50f"),
    ("locked", "1f512"),
    ("locked_with_key", "1f510"),
    ("locked_with_pen", "1f50f"),
    ("locomotive", "1f682"),
    ("lollipop", "1f36d"),
    ("long_drum", "1fa98"),
    ("lotion_bottle", "1f9f4"),
    ("lotus", "1fab7"),
    ("loudly_crying_face", "1f62d"),
    ("loudspeaker", "1f4e2"),
    ("love-you_gesture", "1f91f"),
    ("love_hotel", "1f3e9"),
    ("love_letter", "1f48c"),
    ("low_battery", "1faab"),
    ("low_brightness_symbol", "1f505"),
    ("lower_left_ballpoint_pen", "1f58a"),
    ("lower_left_crayon", "1f58d"),
    ("lower_left_fountain_pen", "1f58b"),
    ("lower_left_paintbrush", "1f58c"),
    ("luggage", "1f9f3"),
    ("lungs", "1fac1"),
    ("lying_face", "1f925"),
    ("mag", "1f50d"),
    ("mage", "1f9d9"),
    ("magic_wand", "1fa84"),
    ("magnet", "1f9f2"),
    ("magnifying_glass_tilted_left", "1f50d"),
    ("magnifying_glass_tilted_right", "1f50e"),
    ("mahjong_red_dragon", "1f004"),
    ("mahjong_tile_red_dragon", "1f004"),
    ("male_sign", "2642"),
    ("male_with_stroke_and_male_and_female_sign", "26a7"),
    ("mammoth", "1f9a3"),
    ("man", "1f468"),
    ("man_and_woman_holding_hands", "1f46b"),
    ("man_artist", "1f468-200d-1f3a8"),
    ("man_astronaut", "1f468-200d-1f680"),
    ("man_bald", "1f468-200d-1f9b2"),
    ("man_beard", "1f9d4-200d-2642"),
    ("man_biking", "1f6b4-200d-2642"),
    ("man_blond_hair", "1f471-200d-2642"),
    ("man_bouncing_ball", "26f9-200d-2642"),
    ("man_bowing", "1f647-200d-2642"),
    ("man_cartwheeling", "1f938-200d-2642"),
    ("man_climbing", "1f9d7-200d-2642"),
    ("man_construction_worker", "1f477-200d-2642"),
    ("man_cook", "1f468-200d-1f373"),
    ("man_curly_hair", "1f468-200d-1f9b1"),
    ("man_dancing", "1f57a"),
    ("man_detective", "1f575-200d-2642"),
    ("man_elf", "1f9dd-200d-2642"),
    ("man_facepalming", "1f926-200d-2642"),
    ("man_factory_worker", "1f468-200d-1f3ed"),
    ("man_fairy", "1f9da-200d-2642"),
    ("man_farmer", "1f468-200d-1f33e"),
    ("man_feeding_baby", "1f468-200d-1f37c"),
    ("man_firefighter", "1f468-200d-1f692"),
    ("man_frowning", "1f64d-200d-2642"),
    ("man_genie", "1f9de-200d-2642"),
    ("man_gesturing_no", "1f645-200d-2642"),
    ("man_gesturing_ok", "1f646-200d-2642"),
    ("man_getting_haircut", "1f487-200d-2642"),
    ("man_getting_massage", "1f486-200d-2642"),
    ("man_golfing", "1f3cc-200d-2642"),
    ("man_guard", "1f482-200d-2642"),
    ("man_health_worker", "1f468-200d-2695"),
    ("man_in_business_suit_levitating", "1f574"),
    ("man_in_lotus_position", "1f9d8-200d-2642"),
    ("man_in_manual_wheelchair", "1f468-200d-1f9bd"),
    ("man_in_manual_wheelchair_facing_right", "1f468-200d-1f9bd-200d-27a1"),
    ("man_in_motorized_wheelchair", "1f468-200d-1f9bc"),
    ("man_in_motorized_wheelchair_facing_right", "1f468-200d-1f9bc-200d-27a1"),
    ("man_in_steamy_room", "1f9d6-200d-2642"),
    ("man_in_tuxedo", "1f935"),
    ("man_judge", "1f468-200d-2696"),
    ("man_juggling", "1f939-200d-2642"),
    ("man_kneeling", "1f9ce-200d-2642"),
    ("man_kneeling_facing_right", "1f9ce-200d-2642-200d-27a1"),
    ("man_lifting_weights", "1f3cb-200d-2642"),
    ("man_mage", "1f9d9-200d-2642"),
    ("man_mechanic", "1f468-200d-1f527"),
    ("man_mountain_biking", "1f6b5-200d-2642"),
    ("man_office_worker", "1f468-200d-1f4bc"),
    ("man_pilot", "1f468-200d-2708"),
    ("man_playing_handball", "1f93e-200d-2642"),
    ("man_playing_water_polo", "1f93d-200d-2642"),
    ("man_police_officer", "1f46e-200d-2642"),
    ("man_pouting", "1f64e-200d-2642"),
    ("man_raising_hand", "1f64b-200d-2642"),
    ("man_red_hair", "1f468-200d-1f9b0"),
    ("man_rowing_boat", "1f6a3-200d-2642"),
    ("man_running", "1f3c3-200d-2642"),
    ("man_running_facing_right", "1f3c3-200d-2642-200d-27a1"),
    ("man_scientist", "1f468-200d-1f52c"),
    ("man_shrugging", "1f937-200d-2642"),
    ("man_singer", "1f468-200d-1f3a4"),
    ("man_standing", "1f9cd-200d-2642"),
    ("man_student", "1f468-200d-1f393"),
    ("man_superhero", "1f9b8-200d-2642"),
    ("man_supervillain", "1f9b9-200d-2642"),
    ("man_surfing", "1f3c4-200d-2642"),
    ("man_swimming", "1f3ca-200d-2642"),
    ("man_teacher", "1f468-200d-1f3eb"),
    ("man_technologist", "1f468-200d-1f4bb"),
    ("man_tipping_hand", "1f481-200d-2642"),
    ("man_vampire", "1f9db-200d-2642"),
    ("man_walking", "1f6b6-200d-2642"),
    ("man_walking_facing_right", "1f6b6-200d-2642-200d-27a1"),
    ("man_wearing_turban", "1f473-200d-2642"),
    ("man_white_hair", "1f468-200d-1f9b3"),
    ("man_with_gua_pi_mao", "1f472"),
    ("man_with_turban", "1f473"),
    ("man_with_veil", "1f470-200d-2642"),
    ("man_with_white_cane", "1f468-200d-1f9af"),
    ("man_with_white_cane_facing_right", "1f468-200d-1f9af-200d-27a1"),
    ("man_zombie", "1f9df-200d-2642"),
    ("mango", "1f96d"),
    ("mans_shoe", "1f45e"),
    ("mantelpiece_clock", "1f570"),
    ("manual_wheelchair", "1f9bd"),
    ("map_of_japan", "1f5fe"),
    ("maple_leaf", "1f341"),
    ("maracas", "1fa87"),
    ("martial_arts_uniform", "1f94b"),
    ("mask", "1f637"),
    ("mate", "1f9c9"),
    ("mate_drink", "1f9c9"),
    ("mattermost", "mattermost"),
    ("meat_on_bone", "1f356"),
    ("mechanic", "1f9d1-200d-1f527"),
    ("mechanical_arm", "1f9be"),
    ("mechanical_leg", "1f9bf"),
    ("medical_symbol", "2695"),
    ("medium_black_circle", "26ab"),
    ("medium_white_circle", "26aa"),
    ("mega", "1f4e3"),
    ("megaphone", "1f4e3"),
    ("melon", "1f348"),
    ("melting_face", "1fae0"),
    ("memo", "1f4dd"),
    ("men_holding_hands", "1f46c"),
    ("men_with_bunny_ears", "1f46f-200d-2642"),
    ("men_wrestling", "1f93c-200d-2642"),
    ("mending_heart", "2764-200d-1fa79"),
    ("menorah", "1f54e"),
    ("menorah_with_nine_branches", "1f54e"),
    ("mens_room", "1f6b9"),
    ("mens_symbol", "1f6b9"),
    ("mermaid", "1f9dc-200d-2640"),
    ("merman", "1f9dc-200d-2642"),
    ("merperson", "1f9dc"),
    ("metal", "1f918"),
    ("metro", "1f687"),
    ("microbe", "1f9a0"),
    ("microphone", "1f3a4"),
    ("microscope", "1f52c"),
    ("middle_finger", "1f595"),
    ("military_helmet", "1fa96"),
    ("military_medal", "1f396"),
    ("milky_way", "1f30c"),
    ("minibus", "1f690"),
    ("minidisc", "1f4bd"),
    ("minus", "2796"),
    ("mirror", "1fa9e"),
    ("mirror_ball", "1faa9"),
    ("moai", "1f5ff"),
    ("mobile_phone", "1f4f1"),
    ("mobile_phone_off", "1f4f4"),
    ("mobile_phone_with_arrow", "1f4f2"),
    ("mobile_phone_with_rightwards_arrow_at_left", "1f4f2"),
    ("money-mouth_face", "1f911"),
    ("money_bag", "1f4b0"),
    ("money_mouth_face", "1f911"),
    ("money_with_wings", "1f4b8"),
    ("moneybag", "1f4b0"),
    ("monkey", "1f412"),
    ("monkey_face", "1f435"),
    ("monorail", "1f69d"),
    ("moon_cake", "1f96e"),
    ("moon_viewing_ceremony", "1f391"),
    ("moose", "1face"),
    ("mosque", "1f54c"),
    ("mosquito", "1f99f"),
    ("mother_christmas", "1f936"),
    ("motor_boat", "1f6e5"),
    ("motor_scooter", "1f6f5"),
    ("motorcycle", "1f3cd"),
    ("motorized_wheelchair", "1f9bc"),
    ("motorway", "1f6e3"),
    ("mount_fuji", "1f5fb"),
    ("mountain", "26f0"),
    ("mountain_bicyclist", "1f6b5"),
    ("mountain_cableway", "1f6a0"),
    ("mountain_railway", "1f69e"),
    ("mouse", "1f42d"),
    ("mouse_face", "1f42d"),
    ("mouse_trap", "1faa4"),
    ("mouth", "1f444"),
    ("movie_camera", "1f3a5"),
    ("moyai", "1f5ff"),
    ("mrs_claus", "1f936"),
    ("multiple_musical_notes", "1f3b6"),
    ("multiply", "2716"),
    ("muscle", "1f4aa"),
    ("mushroom", "1f344"),
    ("musical_keyboard", "1f3b9"),
    ("musical_note", "1f3b5"),
    ("musical_notes", "1f3b6"),
    ("musical_score", "1f3bc"),
    ("muted_speaker", "1f507"),
    ("mx_claus", "1f9d1-200d-1f384"),
    ("nail_polish", "1f485"),
    ("name_badge", "1f4db"),
    ("national_park", "1f3de"),
    ("nauseated_face", "1f922"),
    ("nazar_amulet", "1f9ff"),
    ("necktie", "1f454"),
    ("negative_squared_ab", "1f18e"),
    ("negative_squared_cross_mark", "274e"),
    ("negative_squared_latin_capital_letter_a", "1f170"),
    ("negative_squared_latin_capital_letter_b", "1f171"),
    ("negative_squared_latin_capital_letter_o", "1f17e"),
    ("negative_squared_latin_capital_letter_p", "1f17f"),
    ("nerd_face", "1f913"),
    ("nest_with_eggs", "1faba"),
    ("nesting_dolls", "1fa86"),
    ("neutral_face", "1f610"),
    ("new", "1f195"),
    ("new_button", "1f195"),
    ("new_moon", "1f311"),
    ("new_moon_face", "1f31a"),
    ("new_moon_symbol", "1f311"),
    ("new_moon_with_face", "1f31a"),
    ("newspaper", "1f4f0"),
    ("next_track_button", "23ed"),
    ("ng_button", "1f196"),
    ("night_with_stars", "1f303"),
    ("nine-thirty", "1f564"),
    ("nine_oclock", "1f558"),
    ("ninja", "1f977"),
    ("no_bell", "1f515"),
    ("no_bicycles", "1f6b3"),
    ("no_entry", "26d4"),
    ("no_entry_sign", "1f6ab"),
    ("no_littering", "1f6af"),
    ("no_mobile_phones", "1f4f5"),
    ("no_mouth", "1f636"),
    ("no_one_under_eighteen", "1f51e"),
    ("no_one_under_eighteen_symbol", "1f51e"),
    ("no_pedestrians", "1f6b7"),
    ("no_smoking", "1f6ad"),
    ("no_smoking_symbol", "1f6ad"),
    ("non-potable_water", "1f6b1"),
    ("non-potable_water_symbol", "1f6b1"),
    ("north_east_arrow", "2197"),
    ("north_west_arrow", "2196"),
    ("nose", "1f443"),
    ("notebook", "1f4d3"),
    ("notebook_with_decorative_cover", "1f4d4"),
    ("nut_and_bolt", "1f529"),
    ("o_button_blood_type", "1f17e"),
    ("ocean", "1f30a"),
    ("octagonal_sign", "1f6d1"),
    ("octopus", "1f419"),
    ("oden", "1f362"),
    ("office_building", "1f3e2"),
    ("office_worker", "1f9d1-200d-1f4bc"),
    ("ogre", "1f479"),
    ("oil_drum", "1f6e2"),
    ("ok", "1f197"),
    ("ok_button", "1f197"),
    ("ok_hand", "1f44c"),
    ("ok_hand_sign", "1f44c"),
    ("old_key", "1f5dd"),
    ("old_man", "1f474"),
    ("old_woman", "1f475"),
    ("older_adult", "1f9d3"),
    ("older_man", "1f474"),
    ("older_person", "1f9d3"),
    ("older_woman", "1f475"),
    ("olive", "1fad2"),
    ("om", "1f549"),
    ("om_symbol", "1f549"),
    ("on_arrow", "1f51b"),
    ("on_with_exclamation_mark_with_left_right_arrow_above", "1f51b"),
    ("oncoming_automobile", "1f698"),
    ("oncoming_bus", "1f68d"),
    ("oncoming_fist", "1f44a"),
    ("oncoming_police_car", "1f694"),
    ("oncoming_taxi", "1f696"),
    ("one-piece_swimsuit", "1fa71"),
    ("one-thirty", "1f55c"),
    ("one_oclock", "1f550"),
    ("onion", "1f9c5"),
    ("open_book", "1f4d6"),
    ("open_file_folder", "1f4c2"),
    ("open_hands", "1f450"),
    ("open_hands_sign", "1f450"),
    ("open_lock", "1f513"),
    ("open_mailbox_with_lowered_flag", "1f4ed"),
    ("open_mailbox_with_raised_flag", "1f4ec"),
    ("open_mouth", "1f62e"),
    ("ophiuchus", "26ce"),
    ("optical_disc", "1f4bf"),
    ("optical_disk", "1f4bf"),
    ("orange_book", "1f4d9"),
    ("orange_circle", "1f7e0"),
    ("orange_heart", "1f9e1"),
    ("orange_square", "1f7e7"),
    ("orangutan", "1f9a7"),
    ("orca", "1facd"),
    ("orthodox_cross", "2626"),
    ("otter", "1f9a6"),
    ("outbox_tray", "1f4e4"),
    ("overheated_face", "1f975"),
    ("owl", "1f989"),
    ("ox", "1f402"),
    ("oyster", "1f9aa"),
    ("p_button", "1f17f"),
    ("package", "1f4e6"),
    ("page_facing_up", "1f4c4"),
    ("page_with_curl", "1f4c3"),
    ("pager", "1f4df"),
    ("paintbrush", "1f58c"),
    ("palm_down_hand", "1faf3"),
    ("palm_tree", "1f334"),
    ("palm_up_hand", "1faf4"),
    ("palms_up_together", "1f932"),
    ("pancakes", "1f95e"),
    ("panda", "1f43c"),
    ("panda_face", "1f43c"),
    ("paperclip", "1f4ce"),
    ("parachute", "1fa82"),
    ("parrot", "1f99c"),
    ("part_alternation_mark", "303d"),
    ("party_popper", "1f389"),
    ("partying_face", "1f973"),
    ("passenger_ship", "1f6f3"),
    ("passport_control", "1f6c2"),
    ("pause_button", "23f8"),
    ("paw_prints", "1f43e"),
    ("pea_pod", "1fadb"),
    ("peace_symbol", "262e"),
    ("peach", "1f351"),
    ("peacock", "1f99a"),
    ("peanuts", "1f95c"),
    ("pear", "1f350"),
    ("pedestrian", "1f6b6"),
    ("pen", "1f58a"),
    ("pencil", "1f4dd"),
    ("pencil2", "270f"),
    ("penguin", "1f427"),
    ("pensive", "1f614"),
    ("pensive_face", "1f614"),
    ("people_holding_hands", "1f9d1-200d-1f91d-200d-1f9d1"),
    ("people_hugging", "1fac2"),
    ("people_with_bunny_ears", "1f46f"),
    ("people_wrestling", "1f93c"),
    ("performing_arts", "1f3ad"),
    ("permanent_paper_sign", "267e"),
    ("persevere", "1f623"),
    ("persevering_face", "1f623"),
    ("person", "1f9d1"),
    ("person_bald", "1f9d1-200d-1f9b2"),
    ("person_beard", "1f9d4"),
    ("person_biking", "1f6b4"),
    ("person_blond_hair", "1f471"),
    ("person_bouncing_ball", "26f9"),
    ("person_bowing", "1f647"),
    ("person_bowing_deeply", "1f647"),
    ("person_cartwheeling", "1f938"),
    ("person_climbing", "1f9d7"),
    ("person_curly_hair", "1f9d1-200d-1f9b1"),
    ("person_doing_cartwheel", "1f938"),
    ("person_facepalming", "1f926"),
    ("person_feeding_baby", "1f9d1-200d-1f37c"),
    ("person_fencing", "1f93a"),
    ("person_frowning", "1f64d"),
    ("person_gesturing_no", "1f645"),
    ("person_gesturing_ok", "1f646"),
    ("person_getting_haircut", "1f487"),
    ("person_getting_massage", "1f486"),
    ("person_golfing", "1f3cc"),
    ("person_in_bed", "1f6cc"),
    ("person_in_lotus_position", "1f9d8"),
    ("person_in_manual_wheelchair", "1f9d1-200d-1f9bd"),
    ("person_in_manual_wheelchair_facing_right", "1f9d1-200d-1f9bd-200d-27a1"),
    ("person_in_motorized_wheelchair", "1f9d1-200d-1f9bc"),
    ("person_in_motorized_wheelchair_facing_right", "1f9d1-200d-1f9bc-200d-27a1"),
    ("person_in_steamy_room", "1f9d6"),
    ("person_in_suit_levitating", "1f574"),
    ("person_in_tuxedo", "1f935"),
    ("person_juggling", "1f939"),
    ("person_kneeling", "1f9ce"),
    ("person_kneeling_facing_right", "1f9ce-200d-27a1"),
    ("person_lifting_weights", "1f3cb"),
    ("person_mountain_biking", "1f6b5"),
    ("person_playing_handball", "1f93e"),
    ("person_playing_water_polo", "1f93d"),
    ("person_pouting", "1f64e"),
    ("person_raising_both_hands_in_celebration", "1f64c"),
    ("person_raising_hand", "1f64b"),
    ("person_red_hair", "1f9d1-200d-1f9b0"),
    ("person_rowing_boat", "1f6a3"),
    ("person_running", "1f3c3"),
    ("person_running_facing_right", "1f3c3-200d-27a1"),
    ("person_shrugging", "1f937"),
    ("person_standing", "1f9cd"),
    ("person_surfing", "1f3c4"),
    ("person_swimming", "1f3ca"),
    ("person_taking_bath", "1f6c0"),
    ("person_tipping_hand", "1f481"),
    ("person_walking", "1f6b6"),
    ("person_walking_facing_right", "1f6b6-200d-27a1"),
    ("person_wearing_turban", "1f473"),
    ("person_white_hair", "1f9d1-200d-1f9b3"),
    ("person_with_ball", "26f9"),
    ("person_with_blond_hair", "1f471"),
    ("person_with_crown", "1fac5"),
    ("person_with_folded_hands", "1f64f"),
    ("person_with_headscarf", "1f9d5"),
    ("person_with_pouting_face", "1f64e"),
    ("person_with_skullcap", "1f472"),
    ("person_with_veil", "1f470"),
    ("person_with_white_cane", "1f9d1-200d-1f9af"),
    ("person_with_white_cane_facing_right", "1f9d1-200d-1f9af-200d-27a1"),
    ("personal_computer", "1f4bb"),
    ("petri_dish", "1f9eb"),
    ("phoenix", "1f426-200d-1f525"),
    ("pick", "26cf"),
    ("pickup_truck", "1f6fb"),
    ("pie", "1f967"),
    ("pig", "1f437"),
    ("pig_face", "1f437"),
    ("pig_nose", "1f43d"),
    ("pile_of_poo", "1f4a9"),
    ("pill", "1f48a"),
    ("pilot", "1f9d1-200d-2708"),
    ("pinata", "1fa85"),
    ("pinched_fingers", "1f90c"),
    ("pinching_hand", "1f90f"),
    ("pine_decoration", "1f38d"),
    ("pineapple", "1f34d"),
    ("ping_pong", "1f3d3"),
    ("pink_heart", "1fa77"),
    ("pirate_flag", "1f3f4-200d-2620"),
    ("pisces", "2653"),
    ("pistol", "1f52b"),
    ("pizza", "1f355"),
    ("placard", "1faa7"),
    ("place_of_worship", "1f6d0"),
    ("play_button", "25b6"),
    ("play_or_pause_button", "23ef"),
    ("playground_slide", "1f6dd"),
    ("playing_card_black_joker", "1f0cf"),
    ("pleading_face", "1f97a"),
    ("plunger", "1faa0"),
    ("plus", "2795"),
    ("point_down", "1f447"),
    ("point_left", "1f448"),
    ("point_right", "1f449"),
    ("point_up", "261d"),
    ("polar_bear", "1f43b-200d-2744"),
    ("police_car", "1f693"),
    ("police_car_light", "1f6a8"),
    ("police_cars_revolving_light", "1f6a8"),
    ("police_officer", "1f46e"),
    ("poodle", "1f429"),
    ("pool_8_ball", "1f3b1"),
    ("poop", "1f4a9"),
    ("popcorn", "1f37f"),
    ("post_office", "1f3e4"),
    ("postal_horn", "1f4ef"),
    ("postbox", "1f4ee"),
    ("pot_of_food", "1f372"),
    ("potable_water", "1f6b0"),
    ("potable_water_symbol", "1f6b0"),
    ("potato", "1f954"),
    ("potted_plant", "1fab4"),
    ("pouch", "1f45d"),
    ("poultry_leg", "1f357"),
    ("pound_banknote", "1f4b7"),
    ("pouring_liquid", "1fad7"),
    ("pouting_cat", "1f63e"),
    ("pouting_cat_face", "1f63e"),
    ("pouting_face", "1f621"),
    ("pray", "1f64f"),
    ("prayer_beads", "1f4ff"),
    ("pregnant_man", "1fac3"),
    ("pregnant_person", "1fac4"),
    ("pregnant_woman", "1f930"),
    ("pretzel", "1f968"),
    ("prince", "1f934"),
    ("princess", "1f478"),
    ("printer", "1f5a8"),
    ("probing_cane", "1f9af"),
    ("prohibited", "1f6ab"),
    ("public_address_loudspeaker", "1f4e2"),
    ("punch", "1f44a"),
    ("purple_circle", "1f7e3"),
    ("purple_heart", "1f49c"),
    ("purple_square", "1f7ea"),
    ("purse", "1f45b"),
    ("pushpin", "1f4cc"),
    ("put_litter_in_its_place_symbol", "1f6ae"),
    ("puzzle_piece", "1f9e9"),
    ("question", "2753"),
    ("rabbit", "1f430"),
    ("rabbit_face", "1f430"),
    ("raccoon", "1f99d"),
    ("racing_car", "1f3ce"),
    ("racing_motorcycle", "1f3cd"),
    ("radio", "1f4fb"),
    ("radio_button", "1f518"),
    ("radioactive", "2622"),
    ("radioactive_sign", "2622"),
    ("rage", "1f621"),
    ("railway_car", "1f683"),
    ("railway_track", "1f6e4"),
    ("rainbow", "1f308"),
    ("rainbow_flag", "1f3f3-200d-1f308"),
    ("raised_back_of_hand", "1f91a"),
    ("raised_fist", "270a"),
    ("raised_hand", "270b"),
    ("raised_hand_with_fingers_splayed", "1f590"),
    ("raised_hand_with_part_between_middle_and_ring_fingers", "1f596"),
    ("raised_hands", "1f64c"),
    ("raising_hands", "1f64c"),
    ("ram", "1f40f"),
    ("rat", "1f400"),
    ("razor", "1fa92"),
    ("receipt", "1f9fe"),
    ("record_button", "23fa"),
    ("recreational_vehicle", "1f699"),
    ("recycle", "267b"),
    ("recycling_symbol", "267b"),
    ("red_apple", "1f34e"),
    ("red_circle", "1f534"),
    ("red_envelope", "1f9e7"),
    ("red_exclamation_mark", "2757"),
    ("red_gift_envelope", "1f9e7"),
    ("red_heart", "2764"),
    ("red_paper_lantern", "1f3ee"),
    ("red_question_mark", "2753"),
    ("red_square", "1f7e5"),
    ("red_triangle_pointed_down", "1f53b"),
    ("red_triangle_pointed_up", "1f53a"),
    ("registered", "ae"),
    ("registered_sign", "ae"),
    ("relieved", "1f60c"),
    ("relieved_face", "1f60c"),
    ("reminder_ribbon", "1f397"),
    ("repeat_button", "1f501"),
    ("repeat_single_button", "1f502"),
    ("rescue_workers_helmet", "26d1"),
    ("restroom", "1f6bb"),
    ("reverse_button", "25c0"),
    ("reversed_hand_with_middle_finger_extended", "1f595"),
    ("revolving_hearts", "1f49e"),
    ("rhinoceros", "1f98f"),
    ("ribbon", "1f380"),
    ("rice_ball", "1f359"),
    ("rice_cracker", "1f358"),
    ("right-facing_fist", "1f91c"),
    ("right-pointing_magnifying_glass", "1f50e"),
    ("right_anger_bubble", "1f5ef"),
    ("right_arrow", "27a1"),
    ("right_arrow_curving_down", "2935"),
    ("right_arrow_curving_left", "21a9"),
    ("right_arrow_curving_up", "2934"),
    ("rightwards_arrow_with_hook", "21aa"),
    ("rightwards_hand", "1faf1"),
    ("rightwards_pushing_hand", "1faf8"),
    ("ring", "1f48d"),
    ("ring_buoy", "1f6df"),
    ("ringed_planet", "1fa90"),
    ("roasted_sweet_potato", "1f360"),
    ("robot", "1f916"),
    ("robot_face", "1f916"),
    ("rock", "1faa8"),
    ("rocket", "1f680"),
    ("rofl", "1f923"),
    ("roll_eyes", "1f644"),
    ("roll_of_paper", "1f9fb"),
    ("rolled-up_newspaper", "1f5de"),
    ("roller_coaster", "1f3a2"),
    ("roller_skate", "1f6fc"),
    ("rolling_on_the_floor_laughing", "1f923"),
    ("rooster", "1f413"),
    ("root_vegetable", "1fadc"),
    ("rose", "1f339"),
    ("rosette", "1f3f5"),
    ("rotating_light", "1f6a8"),
    ("round_pushpin", "1f4cd"),
    ("rowboat", "1f6a3"),
    ("rugby_football", "1f3c9"),
    ("runner", "1f3c3"),
    ("running_shirt", "1f3bd"),
    ("running_shirt_with_sash", "1f3bd"),
    ("running_shoe", "1f45f"),
    ("sad_but_relieved_face", "1f625"),
    ("safety_pin", "1f9f7"),
    ("safety_vest", "1f9ba"),
    ("sagittarius", "2650"),
    ("sailboat", "26f5"),
    ("sake", "1f376"),
    ("sake_bottle_and_cup", "1f376"),
    ("salt", "1f9c2"),
    ("salt_shaker", "1f9c2"),
    ("saluting_face", "1fae1"),
    ("sandwich", "1f96a"),
    ("santa_claus", "1f385"),
    ("sari", "1f97b"),
    ("satellite", "1f6f0"),
    ("satellite_antenna", "1f4e1"),
    ("satisfied", "1f606"),
    ("sauropod", "1f995"),
    ("saxophone", "1f3b7"),
    ("scales", "2696"),
    ("scarf", "1f9e3"),
    ("school", "1f3eb"),
    ("school_satchel", "1f392"),
    ("scientist", "1f9d1-200d-1f52c"),
    ("scissors", "2702"),
    ("scooter", "1f6f4"),
    ("scorpio", "264f"),
    ("scorpion", "1f982"),
    ("scorpius", "264f"),
    ("scream", "1f631"),
    ("scream_cat", "1f640"),
    ("screwdriver", "1fa9b"),
    ("scroll", "1f4dc"),
    ("seal", "1f9ad"),
    ("seat", "1f4ba"),
    ("second_place_medal", "1f948"),
    ("see-no-evil_monkey", "1f648"),
    ("see_no_evil", "1f648"),
    ("seedling", "1f331"),
    ("selfie", "1f933"),
    ("serious_face_with_symbols_covering_mouth", "1f92c"),
    ("service_dog", "1f415-200d-1f9ba"),
    ("seven-thirty", "1f562"),
    ("seven_oclock", "1f556"),
    ("sewing_needle", "1faa1"),
    ("shaking_face", "1fae8"),
    ("shallow_pan_of_food", "1f958"),
    ("shamrock", "2618"),
    ("shark", "1f988"),
    ("shaved_ice", "1f367"),
    ("sheaf_of_rice", "1f33e"),
    ("sheep", "1f411"),
    ("shield", "1f6e1"),
    ("shinto_shrine", "26e9"),
    ("ship", "1f6a2"),
    ("shit", "1f4a9"),
    ("shocked_face_with_exploding_head", "1f92f"),
    ("shooting_star", "1f320"),
    ("shopping_bags", "1f6cd"),
    ("shopping_cart", "1f6d2"),
    ("shopping_trolley", "1f6d2"),
    ("shortcake", "1f370"),
    ("shorts", "1fa73"),
    ("shovel", "1fa8f"),
    ("shower", "1f6bf"),
    ("shrimp", "1f990"),
    ("shrug", "1f937"),
    ("shuffle_tracks_button", "1f500"),
    ("shushing_face", "1f92b"),
    ("sign_of_the_horns", "1f918"),
    ("silhouette_of_japan", "1f5fe"),
    ("singer", "1f9d1-200d-1f3a4"),
    ("six-thirty", "1f561"),
    ("six_oclock", "1f555"),
    ("six_pointed_star_with_middle_dot", "1f52f"),
    ("skateboard", "1f6f9"),
    ("ski_and_ski_boot", "1f3bf"),
    ("skier", "26f7"),
    ("skis", "1f3bf"),
    ("skull", "1f480"),
    ("skull_and_crossbones", "2620"),
    ("skunk", "1f9a8"),
    ("sled", "1f6f7"),
    ("sleeping", "1f634"),
    ("sleeping_accommodation", "1f6cc"),
    ("sleeping_face", "1f634"),
    ("sleeping_symbol", "1f4a4"),
    ("sleepy", "1f62a"),
    ("sleepy_face", "1f62a"),
    ("sleuth_or_spy", "1f575"),
    ("slice_of_pizza", "1f355"),
    ("slightly_frowning_face", "1f641"),
    ("slightly_smiling_face", "1f642"),
    ("slot_machine", "1f3b0"),
    ("sloth", "1f9a5"),
    ("small_airplane", "1f6e9"),
    ("small_blue_diamond", "1f539"),
    ("small_orange_diamond", "1f538"),
    ("smile", "1f604"),
    ("smile_cat", "1f638"),
    ("smiley", "1f603"),
    ("smiley_cat", "1f63a"),
    ("smiling_cat_face_with_heart-shaped_eyes", "1f63b"),
    ("smiling_cat_face_with_open_mouth", "1f63a"),
    ("smiling_cat_with_heart-eyes", "1f63b"),
    ("smiling_face", "263a"),
    ("smiling_face_with_halo", "1f607"),
    ("smiling_face_with_heart-eyes", "1f60d"),
    ("smiling_face_with_heart-shaped_eyes", "1f60d"),
    ("smiling_face_with_hearts", "1f970"),
    ("smiling_face_with_horns", "1f608"),
    ("smiling_face_with_open_hands", "1f917"),
    ("smiling_face_with_open_mouth", "1f603"),
    ("smiling_face_with_open_mouth_and_cold_sweat", "1f605"),
    ("smiling_face_with_open_mouth_and_smiling_eyes", "1f604"),
    ("smiling_face_with_open_mouth_and_tightly-closed_eyes", "1f606"),
    ("smiling_face_with_smiling_eyes", "1f60a"),
    ("smiling_face_with_smiling_eyes_and_hand_covering_mouth", "1f92d"),
    ("smiling_face_with_smiling_eyes_and_three_hearts", "1f970"),
    ("smiling_face_with_sunglasses", "1f60e"),
    ("smiling_face_with_tear", "1f972"),
    ("smiling_imp", "1f608"),
    ("smirk", "1f60f"),
    ("smirk_cat", "1f63c"),
    ("smirking_face", "1f60f"),
    ("smoking_symbol", "1f6ac"),
    ("snail", "1f40c"),
    ("snake", "1f40d"),
    ("sneezing_face", "1f927"),
    ("snow-capped_mountain", "1f3d4"),
    ("snow_capped_mountain", "1f3d4"),
    ("snowboarder", "1f3c2"),
    ("snowflake", "2744"),
    ("snowman", "2603"),
    ("snowman_without_snow", "26c4"),
    ("soap", "1f9fc"),
    ("sob", "1f62d"),
    ("soccer", "26bd"),
    ("soccer_ball", "26bd"),
    ("socks", "1f9e6"),
    ("soft_ice_cream", "1f366"),
    ("softball", "1f94e"),
    ("soon_arrow", "1f51c"),
    ("soon_with_rightwards_arrow_above", "1f51c"),
    ("sos", "1f198"),
    ("sos_button", "1f198"),
    ("south_east_arrow", "2198"),
    ("south_west_arrow", "2199"),
    ("spade_suit", "2660"),
    ("spaghetti", "1f35d"),
    ("sparkle", "2747"),
    ("sparkler", "1f387"),
    ("sparkles", "2728"),
    ("sparkling_heart", "1f496"),
    ("speak-no-evil_monkey", "1f64a"),
    ("speak_no_evil", "1f64a"),
    ("speaker", "1f508"),
    ("speaker_high_volume", "1f50a"),
    ("speaker_low_volume", "1f508"),
    ("speaker_medium_volume", "1f509"),
    ("speaker_with_cancellation_stroke", "1f507"),
    ("speaker_with_one_sound_wave", "1f509"),
    ("speaker_with_three_sound_waves", "1f50a"),
    ("speaking_head", "1f5e3"),
    ("speaking_head_in_silhouette", "1f5e3"),
    ("speech_balloon", "1f4ac"),
    ("speedboat", "1f6a4"),
    ("spider", "1f577"),
    ("spider_web", "1f578"),
    ("spiral_calendar", "1f5d3"),
    ("spiral_calendar_pad", "1f5d3"),
    ("spiral_note_pad", "1f5d2"),
    ("spiral_notepad", "1f5d2"),
    ("spiral_shell", "1f41a"),
    ("splashing_sweat_symbol", "1f4a6"),
    ("splatter", "1fadf"),
    ("sponge", "1f9fd"),
    ("spool_of_thread", "1f9f5"),
    ("spoon", "1f944"),
    ("sport_utility_vehicle", "1f699"),
    ("sports_medal", "1f3c5"),
    ("spouting_whale", "1f433"),
    ("squared_cjk_unified_ideograph-5272", "1f239"),
    ("squared_cjk_unified_ideograph-5408", "1f234"),
    ("squared_cjk_unified_ideograph-55b6", "1f23a"),
    ("squared_cjk_unified_ideograph-6307", "1f22f"),
    ("squared_cjk_unified_ideograph-6708", "1f237"),
    ("squared_cjk_unified_ideograph-6709", "1f236"),
    ("squared_cjk_unified_ideograph-6e80", "1f235"),
    ("squared_cjk_unified_ideograph-7121", "1f21a"),
    ("squared_cjk_unified_ideograph-7533", "1f238"),
    ("squared_cjk_unified_ideograph-7981", "1f232"),
    ("squared_cjk_unified_ideograph-7a7a", "1f233"),
    ("squared_cl", "1f191"),
    ("squared_cool", "1f192"),
    ("squared_free", "1f193"),
    ("squared_id", "1f194"),
    ("squared_katakana_koko", "1f201"),
    ("squared_katakana_sa", "1f202"),
    ("squared_new", "1f195"),
    ("squared_ng", "1f196"),
    ("squared_ok", "1f197"),
    ("squared_sos", "1f198"),
    ("squared_up_with_exclamation_mark", "1f199"),
    ("squared_vs", "1f19a"),
    ("squid", "1f991"),
    ("squinting_face_with_tongue", "1f61d"),
    ("stadium", "1f3df"),
    ("staff_of_aesculapius", "2695"),
    ("standing_person", "1f9cd"),
    ("star", "2b50"),
    ("star-struck", "1f929"),
    ("star2", "1f31f"),
    ("star_and_crescent", "262a"),
    ("star_of_david", "2721"),
    ("station", "1f689"),
    ("statue_of_liberty", "1f5fd"),
    ("steam_locomotive", "1f682"),
    ("steaming_bowl", "1f35c"),
    ("stethoscope", "1fa7a"),
    ("stop_button", "23f9"),
    ("stop_sign", "1f6d1"),
    ("stopwatch", "23f1"),
    ("straight_ruler", "1f4cf"),
    ("strawberry", "1f353"),
    ("stuck_out_tongue", "1f61b"),
    ("stuck_out_tongue_closed_eyes", "1f61d"),
    ("stuck_out_tongue_winking_eye", "1f61c"),
    ("student", "1f9d1-200d-1f393"),
    ("studio_microphone", "1f399"),
    ("stuffed_flatbread", "1f959"),
    ("sun", "2600"),
    ("sun_behind_cloud", "26c5"),
    ("sun_behind_large_cloud", "1f325"),
    ("sun_behind_rain_cloud", "1f326"),
    ("sun_behind_small_cloud", "1f324"),
    ("sun_with_face", "1f31e"),
    ("sunflower", "1f33b"),
    ("sunglasses", "1f60e"),
    ("sunny", "2600"),
    ("sunrise", "1f305"),
    ("sunrise_over_mountains", "1f304"),
    ("sunset", "1f307"),
    ("sunset_over_buildings", "1f307"),
    ("superhero", "1f9b8"),
    ("supervillain", "1f9b9"),
    ("surfer", "1f3c4"),
    ("sushi", "1f363"),
    ("suspension_railway", "1f69f"),
    ("swan", "1f9a2"),
    ("sweat", "1f613"),
    ("sweat_droplets", "1f4a6"),
    ("sweat_drops", "1f4a6"),
    ("sweat_smile", "1f605"),
    ("swimmer", "1f3ca"),
    ("synagogue", "1f54d"),
    ("syringe", "1f489"),
    ("t-rex", "1f996"),
    ("t-shirt", "1f455"),
    ("table_tennis_paddle_and_ball", "1f3d3"),
    ("taco", "1f32e"),
    ("tada", "1f389"),
    ("takeout_box", "1f961"),
    ("tamale", "1fad4"),
    ("tanabata_tree", "1f38b"),
    ("tangerine", "1f34a"),
    ("taurus", "2649"),
    ("taxi", "1f695"),
    ("teacher", "1f9d1-200d-1f3eb"),
    ("teacup_without_handle", "1f375"),
    ("teapot", "1fad6"),
    ("tear-off_calendar", "1f4c6"),
    ("technologist", "1f9d1-200d-1f4bb"),
    ("teddy_bear", "1f9f8"),
    ("telephone", "260e"),
    ("telephone_receiver", "1f4de"),
    ("telescope", "1f52d"),
    ("television", "1f4fa"),
    ("ten-thirty", "1f565"),
    ("ten_oclock", "1f559"),
    ("tennis", "1f3be"),
    ("tennis_racquet_and_ball", "1f3be"),
    ("tent", "26fa"),
    ("test_tube", "1f9ea"),
    ("thermometer", "1f321"),
    ("thinking", "1f914"),
    ("thinking_face", "1f914"),
    ("third_place_medal", "1f949"),
    ("thong_sandal", "1fa74"),
    ("thought_balloon", "1f4ad"),
    ("thread", "1f9f5"),
    ("three-thirty", "1f55e"),
    ("three_button_mouse", "1f5b1"),
    ("three_oclock", "1f552"),
    ("thumbs_down", "1f44e"),
    ("thumbs_down_sign", "1f44e"),
    ("thumbs_up", "1f44d"),
    ("thumbs_up_sign", "1f44d"),
    ("thumbsdown", "1f44e"),
    ("thumbsup", "1f44d"),
    ("thunder_cloud_and_rain", "26c8"),
    ("ticket", "1f3ab"),
    ("tiger", "1f42f"),
    ("tiger_face", "1f42f"),
    ("timer_clock", "23f2"),
    ("tired_face", "1f62b"),
    ("toilet", "1f6bd"),
    ("tokyo_tower", "1f5fc"),
    ("tomato", "1f345"),
    ("tongue", "1f445"),
    ("toolbox", "1f9f0"),
    ("tooth", "1f9b7"),
    ("toothbrush", "1faa5"),
    ("top_arrow", "1f51d"),
    ("top_hat", "1f3a9"),
    ("top_with_upwards_arrow_above", "1f51d"),
    ("tornado", "1f32a"),
    ("trackball", "1f5b2"),
    ("tractor", "1f69c"),
    ("trade_mark", "2122"),
    ("trade_mark_sign", "2122"),
    ("train", "1f686"),
    ("tram", "1f68a"),
    ("tram_car", "1f68b"),
    ("transgender_flag", "1f3f3-200d-26a7"),
    ("transgender_symbol", "26a7"),
    ("treasure_chest", "1fa8e"),
    ("triangular_flag", "1f6a9"),
    ("triangular_flag_on_post", "1f6a9"),
    ("triangular_ruler", "1f4d0"),
    ("trident_emblem", "1f531"),
    ("triumph", "1f624"),
    ("troll", "1f9cc"),
    ("trolleybus", "1f68e"),
    ("trombone", "1fa8a"),
    ("trophy", "1f3c6"),
    ("tropical_drink", "1f379"),
    ("tropical_fish", "1f420"),
    ("trumpet", "1f3ba"),
    ("tulip", "1f337"),
    ("tumbler_glass", "1f943"),
    ("turkey", "1f983"),
    ("turtle", "1f422"),
    ("twelve-thirty", "1f567"),
    ("twelve_oclock", "1f55b"),
    ("twisted_rightwards_arrows", "1f500"),
    ("two-hump_camel", "1f42b"),
    ("two-thirty", "1f55d"),
    ("two_hearts", "1f495"),
    ("two_men_holding_hands", "1f46c"),
    ("two_oclock", "1f551"),
    ("two_women_holding_hands", "1f46d"),
    ("umbrella", "2614"),
    ("umbrella_on_ground", "26f1"),
    ("umbrella_with_rain_drops", "2614"),
    ("unamused", "1f612"),
    ("unamused_face", "1f612"),
    ("unicorn", "1f984"),
    ("unicorn_face", "1f984"),
    ("unlock", "1f513"),
    ("unlocked", "1f513"),
    ("up", "1f199"),
    ("up-down_arrow", "2195"),
    ("up-left_arrow", "2196"),
    ("up-pointing_red_triangle", "1f53a"),
    ("up-pointing_small_red_triangle", "1f53c"),
    ("up-right_arrow", "2197"),
    ("up_arrow", "2b06"),
    ("up_button", "1f199"),
    ("up_down_arrow", "2195"),
    ("upside-down_face", "1f643"),
    ("upside_down_face", "1f643"),
    ("upwards_black_arrow", "2b06"),
    ("upwards_button", "1f53c"),
    ("us", "1f1fa-1f1f8"),
    ("v", "270c"),
    ("vampire", "1f9db"),
    ("vertical_traffic_light", "1f6a6"),
    ("vibration_mode", "1f4f3"),
    ("victory_hand", "270c"),
    ("video_camera", "1f4f9"),
    ("video_game", "1f3ae"),
    ("videocassette", "1f4fc"),
    ("violin", "1f3bb"),
    ("virgo", "264d"),
    ("volcano", "1f30b"),
    ("volleyball", "1f3d0"),
    ("vs_button", "1f19a"),
    ("vulcan_salute", "1f596"),
    ("waffle", "1f9c7"),
    ("waning_crescent_moon", "1f318"),
    ("waning_crescent_moon_symbol", "1f318"),
    ("waning_gibbous_moon", "1f316"),
    ("waning_gibbous_moon_symbol", "1f316"),
    ("warning", "26a0"),
    ("warning_sign", "26a0"),
    ("wastebasket", "1f5d1"),
    ("watch", "231a"),
    ("water_buffalo", "1f403"),
    ("water_closet", "1f6be"),
    ("water_pistol", "1f52b"),
    ("water_polo", "1f93d"),
    ("water_wave", "1f30a"),
    ("watermelon", "1f349"),
    ("wave", "1f44b"),
    ("waving_black_flag", "1f3f4"),
    ("waving_hand", "1f44b"),
    ("waving_hand_sign", "1f44b"),
    ("waving_white_flag", "1f3f3"),
    ("wavy_dash", "3030"),
    ("waxing_crescent_moon", "1f312"),
    ("waxing_crescent_moon_symbol", "1f312"),
    ("waxing_gibbous_moon", "1f314"),
    ("waxing_gibbous_moon_symbol", "1f314"),
    ("weary", "1f629"),
    ("weary_cat", "1f640"),
    ("weary_cat_face", "1f640"),
    ("weary_face", "1f629"),
    ("wedding", "1f492"),
    ("weight_lifter", "1f3cb"),
    ("whale", "1f433"),
    ("wheel", "1f6de"),
    ("wheel_of_dharma", "2638"),
    ("wheelchair_symbol", "267f"),
    ("white_cane", "1f9af"),
    ("white_check_mark", "2705"),
    ("white_circle", "26aa"),
    ("white_down_pointing_backhand_index", "1f447"),
    ("white_exclamation_mark", "2755"),
    ("white_exclamation_mark_ornament", "2755"),
    ("white_flag", "1f3f3"),
    ("white_flower", "1f4ae"),
    ("white_frowning_face", "2639"),
    ("white_heart", "1f90d"),
    ("white_heavy_check_mark", "2705"),
    ("white_large_square", "2b1c"),
    ("white_left_pointing_backhand_index", "1f448"),
    ("white_medium-small_square", "25fd"),
    ("white_medium_small_square", "25fd"),
    ("white_medium_square", "25fb"),
    ("white_medium_star", "2b50"),
    ("white_question_mark", "2754"),
    ("white_question_mark_ornament", "2754"),
    ("white_right_pointing_backhand_index", "1f449"),
    ("white_small_square", "25ab"),
    ("white_smiling_face", "263a"),
    ("white_square_button", "1f533"),
    ("white_sun_behind_cloud", "1f325"),
    ("white_sun_behind_cloud_with_rain", "1f326"),
    ("white_sun_with_small_cloud", "1f324"),
    ("white_up_pointing_backhand_index", "1f446"),
    ("white_up_pointing_index", "261d"),
    ("wilted_flower", "1f940"),
    ("wind_blowing_face", "1f32c"),
    ("wind_chime", "1f390"),
    ("wind_face", "1f32c"),
    ("window", "1fa9f"),
    ("wine_glass", "1f377"),
    ("wing", "1fabd"),
    ("wink", "1f609"),
    ("winking_face", "1f609"),
    ("winking_face_with_tongue", "1f61c"),
    ("wireless", "1f6dc"),
    ("wolf", "1f43a"),
    ("wolf_face", "1f43a"),
    ("woman", "1f469"),
    ("woman_and_man_holding_hands", "1f46b"),
    ("woman_artist", "1f469-200d-1f3a8"),
    ("woman_astronaut", "1f469-200d-1f680"),
    ("woman_bald", "1f469-200d-1f9b2"),
    ("woman_beard", "1f9d4-200d-2640"),
    ("woman_biking", "1f6b4-200d-2640"),
    ("woman_blond_hair", "1f471-200d-2640"),
    ("woman_bouncing_ball", "26f9-200d-2640"),
    ("woman_bowing", "1f647-200d-2640"),
    ("woman_cartwheeling", "1f938-200d-2640"),
    ("woman_climbing", "1f9d7-200d-2640"),
    ("woman_construction_worker", "1f477-200d-2640"),
    ("woman_cook", "1f469-200d-1f373"),
    ("woman_curly_hair", "1f469-200d-1f9b1"),
    ("woman_dancing", "1f483"),
    ("woman_detective", "1f575-200d-2640"),
    ("woman_elf", "1f9dd-200d-2640"),
    ("woman_facepalming", "1f926-200d-2640"),
    ("woman_factory_worker", "1f469-200d-1f3ed"),
    ("woman_fairy", "1f9da-200d-2640"),
    ("woman_farmer", "1f469-200d-1f33e"),
    ("woman_feeding_baby", "1f469-200d-1f37c"),
    ("woman_firefighter", "1f469-200d-1f692"),
    ("woman_frowning", "1f64d-200d-2640"),
    ("woman_genie", "1f9de-200d-2640"),
    ("woman_gesturing_no", "1f645-200d-2640"),
    ("woman_gesturing_ok", "1f646-200d-2640"),
    ("woman_getting_haircut", "1f487-200d-2640"),
    ("woman_getting_massage", "1f486-200d-2640"),
    ("woman_golfing", "1f3cc-200d-2640"),
    ("woman_guard", "1f482-200d-2640"),
    ("woman_health_worker", "1f469-200d-2695"),
    ("woman_in_lotus_position", "1f9d8-200d-2640"),
    ("woman_in_manual_wheelchair", "1f469-200d-1f9bd"),
    ("woman_in_manual_wheelchair_facing_right", "1f469-200d-1f9bd-200d-27a1"),
    ("woman_in_motorized_wheelchair", "1f469-200d-1f9bc"),
    ("woman_in_motorized_wheelchair_facing_right", "1f469-200d-1f9bc-200d-27a1"),
    ("woman_in_steamy_room", "1f9d6-200d-2640"),
    ("woman_in_tuxedo", "1f935-200d-2640"),
    ("woman_judge", "1f469-200d-2696"),
    ("woman_juggling", "1f939-200d-2640"),
    ("woman_kneeling", "1f9ce-200d-2640"),
    ("woman_kneeling_facing_right", "1f9ce-200d-2640-200d-27a1"),
    ("woman_lifting_weights", "1f3cb-200d-2640"),
    ("woman_mage", "1f9d9-200d-2640"),
    ("woman_mechanic", "1f469-200d-1f527"),
    ("woman_mountain_biking", "1f6b5-200d-2640"),
    ("woman_office_worker", "1f469-200d-1f4bc"),
    ("woman_pilot", "1f469-200d-2708"),
    ("woman_playing_handball", "1f93e-200d-2640"),
    ("woman_playing_water_polo", "1f93d-200d-2640"),
    ("woman_police_officer", "1f46e-200d-2640"),
    ("woman_pouting", "1f64e-200d-2640"),
    ("woman_raising_hand", "1f64b-200d-2640"),
    ("woman_red_hair", "1f469-200d-1f9b0"),
    ("woman_rowing_boat", "1f6a3-200d-2640"),
    ("woman_running", "1f3c3-200d-2640"),
    ("woman_running_facing_right", "1f3c3-200d-2640-200d-27a1"),
    ("woman_scientist", "1f469-200d-1f52c"),
    ("woman_shrugging", "1f937-200d-2640"),
    ("woman_singer", "1f469-200d-1f3a4"),
    ("woman_standing", "1f9cd-200d-2640"),
    ("woman_student", "1f469-200d-1f393"),
    ("woman_superhero", "1f9b8-200d-2640"),
    ("woman_supervillain", "1f9b9-200d-2640"),
    ("woman_surfing", "1f3c4-200d-2640"),
    ("woman_swimming", "1f3ca-200d-2640"),
    ("woman_teacher", "1f469-200d-1f3eb"),
    ("woman_technologist", "1f469-200d-1f4bb"),
    ("woman_tipping_hand", "1f481-200d-2640"),
    ("woman_vampire", "1f9db-200d-2640"),
    ("woman_walking", "1f6b6-200d-2640"),
    ("woman_walking_facing_right", "1f6b6-200d-2640-200d-27a1"),
    ("woman_wearing_turban", "1f473-200d-2640"),
    ("woman_white_hair", "1f469-200d-1f9b3"),
    ("woman_with_bunny_ears", "1f46f"),
    ("woman_with_headscarf", "1f9d5"),
    ("woman_with_veil", "1f470-200d-2640"),
    ("woman_with_white_cane", "1f469-200d-1f9af"),
    ("woman_with_white_cane_facing_right", "1f469-200d-1f9af-200d-27a1"),
    ("woman_zombie", "1f9df-200d-2640"),
    ("womans_boot", "1f462"),
    ("womans_boots", "1f462"),
    ("womans_clothes", "1f45a"),
    ("womans_hat", "1f452"),
    ("womans_sandal", "1f461"),
    ("women_holding_hands", "1f46d"),
    ("women_with_bunny_ears", "1f46f-200d-2640"),
    ("women_wrestling", "1f93c-200d-2640"),
    ("womens_room", "1f6ba"),
    ("womens_symbol", "1f6ba"),
    ("wood", "1fab5"),
    ("woozy_face", "1f974"),
    ("world_map", "1f5fa"),
    ("worm", "1fab1"),
    ("worried", "1f61f"),
    ("worried_face", "1f61f"),
    ("wrapped_gift", "1f381"),
    ("wrapped_present", "1f381"),
    ("wrench", "1f527"),
    ("wrestlers", "1f93c"),
    ("writing_hand", "270d"),
    ("x", "274c"),
    ("x-ray", "1fa7b"),
    ("yarn", "1f9f6"),
    ("yawning_face", "1f971"),
    ("yellow_circle", "1f7e1"),
    ("yellow_heart", "1f49b"),
    ("yellow_square", "1f7e8"),
    ("yen_banknote", "1f4b4"),
    ("yin_yang", "262f"),
    ("yo-yo", "1fa80"),
    ("yum", "1f60b"),
    ("zany_face", "1f92a"),
    ("zap", "26a1"),
    ("zebra", "1f993"),
    ("zebra_face", "1f993"),
    ("zipper-mouth_face", "1f910"),
    ("zipper_mouth_face", "1f910"),
    ("zombie", "1f9df"),
    ("zzz", "1f4a4"),
];
