mod chinese_punctuation_test;
mod fullwidth_to_halfwidth_test;
mod registry_test;
mod spacing_between_cjk_and_ascii_test;
