/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/


mod atomic_bool_tests;
mod backend_tests;
mod strong_cas_tests;
