mod packing;
