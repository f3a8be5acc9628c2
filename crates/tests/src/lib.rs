
#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod operator_create_tests;

#[cfg(test)]
mod operator_update_tests;

#[cfg(test)]
mod operator_delete_tests;

#[cfg(test)]
mod officer_lookup_tests;

#[cfg(test)]
mod criminal_create_tests;

#[cfg(test)]
mod criminal_update_tests;

#[cfg(test)]
mod criminal_delete_tests;

#[cfg(test)]
mod case_create_tests;

#[cfg(test)]
mod case_update_tests;

#[cfg(test)]
mod case_delete_tests;
