mod sync_channel_tests;
